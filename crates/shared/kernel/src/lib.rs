//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading and the naming helpers that external
//! contracts (env files, build defines) depend on.
//!
//! ## Naming
//! ```rust
//! use folio_kernel::naming::upper_snake;
//! assert_eq!(upper_snake("themeSwitcher"), "THEME_SWITCHER");
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use folio_kernel::config::load_config;
//! use folio_kernel::domain::config::SiteConfig;
//! let cfg: SiteConfig = load_config(Some("folio.toml")).unwrap();
//! ```

pub mod config;
pub mod naming;

pub use folio_domain as domain;
