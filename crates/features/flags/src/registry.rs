use crate::catalog::FLAGS;
use crate::error::FlagError;
use folio_domain::flags::{Environment, FeatureFlag, FlagCategory};
use fxhash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::{debug, warn};

/// Read-only view over a table of flags.
///
/// [`FlagRegistry::global`] is the site's table; [`FlagRegistry::new`] wraps any other slice
/// (tests, tooling). Lookups never fail: unknown names are simply absent.
#[derive(Debug, Clone, Copy)]
pub struct FlagRegistry<'a> {
    flags: &'a [FeatureFlag],
}

impl FlagRegistry<'static> {
    /// The process-wide registry.
    #[must_use]
    pub const fn global() -> Self {
        Self { flags: FLAGS }
    }
}

impl<'a> FlagRegistry<'a> {
    #[must_use]
    pub const fn new(flags: &'a [FeatureFlag]) -> Self {
        Self { flags }
    }

    #[must_use]
    pub const fn flags(&self) -> &'a [FeatureFlag] {
        self.flags
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.flags.len()
    }

    /// Exact-match lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a FeatureFlag> {
        let found = self.flags.iter().find(|f| f.name == name);
        if found.is_none() {
            debug!(flag = name, "Unknown feature flag");
        }
        found
    }

    /// Flags of one category, in registry order.
    #[must_use]
    pub fn by_category(&self, category: FlagCategory) -> Vec<&'a FeatureFlag> {
        self.flags.iter().filter(|f| f.category == category).collect()
    }

    /// One entry per flag with its value in `env`.
    #[must_use]
    pub fn for_environment(&self, env: Environment) -> FxHashMap<&'a str, bool> {
        self.flags.iter().map(|f| (f.name, f.environments.get(env))).collect()
    }

    /// Whether `name` is on in `env`. Unknown flags are off.
    #[must_use]
    pub fn is_enabled(&self, name: &str, env: Environment) -> bool {
        self.get(name).is_some_and(|f| f.environments.get(env))
    }

    /// Checks that every declared dependency names a registered flag.
    ///
    /// Only existence is checked. Cycles are not detected, and a dependent flag may be on
    /// while its dependency is off: dependencies are declarative metadata.
    #[must_use]
    pub fn validate_dependencies(&self) -> DependencyReport {
        let known: FxHashSet<&str> = self.flags.iter().map(|f| f.name).collect();

        let mut errors = Vec::new();
        for flag in self.flags {
            for dep in flag.dependencies.iter().filter(|dep| !known.contains(**dep)) {
                errors.push(format!("Flag \"{}\" depends on unknown flag \"{dep}\"", flag.name));
            }
        }

        for error in &errors {
            warn!("{error}");
        }

        DependencyReport { valid: errors.is_empty(), errors }
    }
}

impl Default for FlagRegistry<'static> {
    fn default() -> Self {
        Self::global()
    }
}

/// Outcome of [`FlagRegistry::validate_dependencies`]. Callers decide whether to block on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyReport {
    pub valid: bool,
    /// One message per missing dependency reference.
    pub errors: Vec<String>,
}

impl DependencyReport {
    /// Turns an invalid report into [`FlagError::Dependencies`].
    ///
    /// # Errors
    /// Returns [`FlagError::Dependencies`] when at least one dependency is missing.
    pub fn into_result(self) -> Result<(), FlagError> {
        if self.valid {
            Ok(())
        } else {
            Err(FlagError::Dependencies { errors: self.errors, context: None })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::flags::EnvironmentValues;

    const BROKEN: &[FeatureFlag] = &[
        FeatureFlag::new("calculators", "", FlagCategory::Ui),
        FeatureFlag::new("calculatorAdvanced", "", FlagCategory::Experimental)
            .depends_on(&["calculators"]),
        FeatureFlag::new("orphan", "", FlagCategory::Api).depends_on(&["doesNotExist"]),
    ];

    #[test]
    fn global_registry_is_consistent() {
        let registry = FlagRegistry::global();
        assert!(registry.len() > 0);
        assert!(registry.validate_dependencies().valid);

        let names: FxHashSet<&str> = registry.flags().iter().map(|f| f.name).collect();
        assert_eq!(names.len(), registry.len(), "flag names must be unique");
    }

    #[test]
    fn missing_dependency_yields_one_error() {
        let report = FlagRegistry::new(BROKEN).validate_dependencies();
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("orphan"));
        assert!(report.errors[0].contains("doesNotExist"));
    }

    #[test]
    fn dependency_on_disabled_flag_is_still_valid() {
        let flags = [
            FeatureFlag::new("base", "", FlagCategory::Ui),
            FeatureFlag::new("extra", "", FlagCategory::Ui)
                .environments(EnvironmentValues::uniform(true))
                .depends_on(&["base"]),
        ];
        let registry = FlagRegistry::new(&flags);
        assert!(registry.validate_dependencies().valid);
        assert!(registry.is_enabled("extra", Environment::Production));
    }

    #[test]
    fn dependency_cycles_are_not_reported() {
        let flags = [
            FeatureFlag::new("a", "", FlagCategory::Ui).depends_on(&["b"]),
            FeatureFlag::new("b", "", FlagCategory::Ui).depends_on(&["a"]),
        ];
        assert!(FlagRegistry::new(&flags).validate_dependencies().valid);
    }

    #[test]
    fn into_result_carries_messages() {
        let err = FlagRegistry::new(BROKEN).validate_dependencies().into_result().unwrap_err();
        assert!(err.to_string().contains("doesNotExist"));
        assert!(FlagRegistry::global().validate_dependencies().into_result().is_ok());
    }

    #[test]
    fn unknown_flag_is_disabled() {
        assert!(FlagRegistry::global().get("nonexistent").is_none());
        assert!(!FlagRegistry::global().is_enabled("nonexistent", Environment::Development));
    }
}
