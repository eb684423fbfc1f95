//! # Domain Models
//!
//! Pure data types shared by every Folio crate: feature flags, dashboard configuration,
//! content posts and site configuration.
//! Keep it lean: no I/O, no rendering, no logging.

pub mod config;
pub mod constants;
pub mod content;
pub mod dashboard;
pub mod flags;
