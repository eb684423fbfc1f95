use super::emit;
use anyhow::Result;
use folio::domain::flags::{Environment, FlagCategory};
use folio::flags::{FlagRegistry, FlagResolver, build_defines, render_env_file};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FlagRow<'a> {
    name: &'a str,
    category: FlagCategory,
    enabled: bool,
    build_time_optimization: bool,
    dependencies: &'a [&'a str],
    description: &'a str,
}

/// Prints every flag (optionally one category) with its effective value in `env`,
/// `PUBLIC_FEATURE_*` overrides included.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn list(
    out: &mut impl Write,
    site_title: &str,
    env: Environment,
    category: Option<FlagCategory>,
    json: bool,
) -> Result<()> {
    let registry = FlagRegistry::global();
    let resolver = FlagResolver::new(registry, env);

    let rows: Vec<FlagRow<'_>> = registry
        .flags()
        .iter()
        .filter(|f| category.is_none_or(|c| f.category == c))
        .map(|f| FlagRow {
            name: f.name,
            category: f.category,
            enabled: resolver.is_enabled(f.name),
            build_time_optimization: f.build_time_optimization,
            dependencies: f.dependencies,
            description: f.description,
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{site_title} feature flags ({env})")?;
    for row in &rows {
        let state = if row.enabled { "on" } else { "off" };
        writeln!(out, "  {:<22} {:<13} {:<4} {}", row.name, row.category, state, row.description)?;
    }
    Ok(())
}

/// Prints the dependency report and returns whether it is valid.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn validate(out: &mut impl Write) -> Result<bool> {
    let report = FlagRegistry::global().validate_dependencies();
    if report.valid {
        writeln!(out, "✅ All flag dependencies are valid")?;
    } else {
        for error in &report.errors {
            writeln!(out, "❌ {error}")?;
        }
    }
    Ok(report.valid)
}

/// Exports registry values only; `PUBLIC_FEATURE_*` overrides are deliberately ignored.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn env_file(out: &mut impl Write, env: Environment, output: Option<&Path>) -> Result<()> {
    emit(out, output, &render_env_file(FlagRegistry::global(), env))
}

/// Exports registry values only; `PUBLIC_FEATURE_*` overrides are deliberately ignored.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn defines(out: &mut impl Write, env: Environment) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &build_defines(FlagRegistry::global(), env))?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn json_list_filters_by_category() {
        let out =
            capture(|o| list(o, "Folio", Environment::Production, Some(FlagCategory::Analytics), true));
        let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = rows.as_array().unwrap();
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r["category"] == "analytics"));
    }

    #[test]
    fn table_list_is_titled_by_site() {
        let out = capture(|o| list(o, "Trading Notes", Environment::Staging, None, false));
        assert!(out.starts_with("Trading Notes feature flags (staging)"));
        assert!(out.contains("themeSwitcher"));
    }

    #[test]
    fn global_registry_validates() {
        let mut buf = Vec::new();
        assert!(validate(&mut buf).unwrap());
        assert!(String::from_utf8(buf).unwrap().contains("valid"));
    }

    #[test]
    fn defines_are_a_json_object() {
        let out = capture(|o| defines(o, Environment::Development));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.as_object().unwrap().keys().all(|k| k.starts_with("__FEATURE_")));
    }
}
