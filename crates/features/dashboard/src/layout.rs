//! Layout identifiers and what they resolve to.
//!
//! A layout id picks two things: the [`LayoutKind`] that renders the dashboard, and the
//! CSS classes of its grid. Both come from [`LAYOUTS`]; unknown ids fall back to the
//! generic kind with [`DEFAULT_CLASSES`].

use folio_domain::constants::FUNDAMENTAL_LAYOUT;

/// Render path of a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Header, chart grid, footer; driven entirely by configuration.
    Generic,
    /// Development-only fundamentals view backed by a data provider.
    Fundamental,
}

pub const DEFAULT_CLASSES: &str = "dashboard-grid grid grid-cols-1 gap-4";

/// `(layout id, kind, grid classes)`.
pub const LAYOUTS: &[(&str, LayoutKind, &str)] = &[
    ("grid_1x1", LayoutKind::Generic, "dashboard-grid grid grid-cols-1 gap-4"),
    ("grid_2x2", LayoutKind::Generic, "dashboard-grid grid grid-cols-1 md:grid-cols-2 gap-4"),
    ("grid_2x3", LayoutKind::Generic, "dashboard-grid grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4"),
    ("grid_3x3", LayoutKind::Generic, "dashboard-grid grid grid-cols-1 md:grid-cols-3 gap-4"),
    (FUNDAMENTAL_LAYOUT, LayoutKind::Fundamental, "dashboard-grid grid grid-cols-3 gap-2"),
    ("stack", LayoutKind::Generic, "dashboard-grid flex flex-col gap-6"),
];

fn lookup(layout: &str) -> Option<&'static (&'static str, LayoutKind, &'static str)> {
    LAYOUTS.iter().find(|(id, ..)| *id == layout)
}

impl LayoutKind {
    /// Kind registered for `layout`; unregistered ids are generic.
    #[must_use]
    pub fn resolve(layout: &str) -> Self {
        lookup(layout).map_or(Self::Generic, |(_, kind, _)| *kind)
    }
}

/// Grid classes for `layout`. The same id always yields the same classes.
#[must_use]
pub fn layout_classes(layout: &str) -> &'static str {
    lookup(layout).map_or(DEFAULT_CLASSES, |(_, _, classes)| classes)
}
