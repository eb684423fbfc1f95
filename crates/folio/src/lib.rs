//! Facade crate for Folio features and shared modules.
//! Re-exports domain/kernel primitives and the feature slices enabled at build time.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `folio` with the desired slices (`dashboard`/`content`, both on by default).
//! - Flags are always available; they decide which pages exist at all.

pub use folio_domain as domain;
pub use folio_flags as flags;
pub use folio_kernel as kernel;

#[cfg(feature = "content")]
pub use folio_content as content;
#[cfg(feature = "dashboard")]
pub use folio_dashboard as dashboard;

/// Slices compiled into this build.
pub mod features {
    pub const ENABLED: &[&str] = &[
        "flags",
        #[cfg(feature = "dashboard")]
        "dashboard",
        #[cfg(feature = "content")]
        "content",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::features;

    #[test]
    fn flags_slice_is_always_enabled() {
        assert!(features::is_enabled("flags"));
        assert!(!features::is_enabled("billing"));
    }
}
