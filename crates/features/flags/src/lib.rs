//! # Feature Flags
//!
//! Single source of truth for which pages and sections of the site exist in each
//! deployment environment.
//!
//! * [`FlagRegistry`] is an immutable view over the flag table; [`FlagRegistry::global`]
//!   is the site's table, defined once in a `static`.
//! * [`FlagRegistry::validate_dependencies`] checks that declared dependencies exist. It
//!   collects messages instead of failing, and does not enforce enablement or detect cycles.
//! * [`env_var_name`] / [`build_define_name`] derive the names used by generated env files
//!   and bundler defines; [`render_env_file`] / [`build_defines`] produce those artefacts.
//! * [`FlagResolver`] applies `PUBLIC_FEATURE_*` overrides on top of the table.
//!
//! ```rust
//! use folio_flags::{get_flag_by_name, get_env_var_name};
//!
//! assert!(get_flag_by_name("themeSwitcher").is_some());
//! assert_eq!(get_env_var_name("themeSwitcher"), "PUBLIC_FEATURE_THEME_SWITCHER");
//! ```

mod catalog;
mod error;
mod export;
mod naming;
mod registry;
mod resolver;

pub use crate::error::{FlagError, FlagErrorExt};
pub use crate::export::{build_defines, render_env_file};
pub use crate::naming::{build_define_name, env_var_name};
pub use crate::registry::{DependencyReport, FlagRegistry};
pub use crate::resolver::{FlagResolver, OverrideSource, ProcessEnv};
pub use folio_domain::flags::{
    Environment, EnvironmentSet, EnvironmentValues, FeatureFlag, FlagCategory,
};

use fxhash::FxHashMap;

/// Looks a flag up in the global registry.
#[must_use]
pub fn get_flag_by_name(name: &str) -> Option<&'static FeatureFlag> {
    FlagRegistry::global().get(name)
}

/// Flags of one category from the global registry, in registry order.
#[must_use]
pub fn get_flags_by_category(category: FlagCategory) -> Vec<&'static FeatureFlag> {
    FlagRegistry::global().by_category(category)
}

/// Every global flag's value in `env`.
#[must_use]
pub fn get_flags_for_environment(env: Environment) -> FxHashMap<&'static str, bool> {
    FlagRegistry::global().for_environment(env)
}

/// Dependency report for the global registry.
#[must_use]
pub fn validate_flag_dependencies() -> DependencyReport {
    FlagRegistry::global().validate_dependencies()
}

#[must_use]
pub fn get_env_var_name(flag_name: &str) -> String {
    env_var_name(flag_name)
}

#[must_use]
pub fn get_build_define_name(flag_name: &str) -> String {
    build_define_name(flag_name)
}

/// Whether `name` is on in `env` according to the global registry.
#[must_use]
pub fn is_enabled(name: &str, env: Environment) -> bool {
    FlagRegistry::global().is_enabled(name, env)
}
