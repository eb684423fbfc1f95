//! # Dashboards
//!
//! Turns a [`DashboardConfig`](folio_domain::dashboard::DashboardConfig) into markup
//! without any per-dashboard layout code.
//!
//! * The layout id resolves to a [`LayoutKind`]. Generic layouts render an optional
//!   header, one [`ChartSlot`] per chart in configuration order, and an optional footer.
//! * `fundamental_3x3` renders the development-only [`FundamentalView`]. Without a
//!   [`FundamentalProvider`] or outside development it shows [`DevOnlyNotice`]; provider
//!   failures are caught by an error boundary that offers a full-page reload.
//! * [`render_dashboard`] serialises the component tree to HTML.
//!
//! ```rust
//! use folio_dashboard::{DashboardProps, render_dashboard};
//! use folio_domain::dashboard::DashboardConfig;
//!
//! let config = DashboardConfig { id: "empty".into(), layout: "grid_2x2".into(), ..Default::default() };
//! let html = render_dashboard(DashboardProps::new(config));
//! assert!(html.contains("data-dashboard-id=\"empty\""));
//! ```

mod components;
mod dashboard;
mod error;
mod fundamental;
mod layout;
mod provider;

pub use crate::components::{
    ChartGrid, ChartGridProps, ChartSlot, ChartSlotProps, DashboardFooter, DashboardFooterProps,
    DashboardHeader, DashboardHeaderProps, chart_image_path, chart_key,
};
pub use crate::dashboard::{Dashboard, DashboardProps, render_dashboard};
pub use crate::error::{DashboardError, DashboardErrorExt};
pub use crate::fundamental::{
    DEV_ONLY_MESSAGE, DevOnlyNotice, ERROR_MESSAGE, FundamentalErrorPanel, FundamentalView,
    FundamentalViewProps,
};
pub use crate::layout::{DEFAULT_CLASSES, LAYOUTS, LayoutKind, layout_classes};
pub use crate::provider::{
    FundamentalProvider, FundamentalSnapshot, FundamentalSource, Metric, StaticFundamentals,
};
