//! Generated configuration artefacts: `.env` files and bundler defines.

use crate::naming::{build_define_name, env_var_name};
use crate::registry::FlagRegistry;
use folio_domain::flags::Environment;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Renders one `PUBLIC_FEATURE_*=true|false` line per flag, in registry order.
/// Values come from the registry; process `PUBLIC_FEATURE_*` overrides are deliberately ignored.
#[must_use]
pub fn render_env_file(registry: FlagRegistry<'_>, env: Environment) -> String {
    let mut out = format!("# Feature flags ({env})\n");
    for flag in registry.flags() {
        let _ = writeln!(out, "{}={}", env_var_name(flag.name), flag.environments.get(env));
    }
    out
}

/// Build-time defines for flags eligible for dead-code elimination.
/// Like [`render_env_file`], ignores `PUBLIC_FEATURE_*` overrides.
#[must_use]
pub fn build_defines(registry: FlagRegistry<'_>, env: Environment) -> BTreeMap<String, bool> {
    registry
        .flags()
        .iter()
        .filter(|f| f.build_time_optimization)
        .map(|f| (build_define_name(f.name), f.environments.get(env)))
        .collect()
}
