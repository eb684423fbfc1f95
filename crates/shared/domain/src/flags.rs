//! Feature flag definitions.
//!
//! A flag is a named boolean toggle resolved per deployment [`Environment`]. Flags are
//! declared once in a static table and never mutated, so every type here is
//! `const`-constructible and borrows `'static` strings.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Deployment environments. This set is closed.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Classification of a flag. Has no behavioral effect.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FlagCategory {
    Ui,
    Api,
    Experimental,
    Analytics,
    Performance,
}

bitflags! {
    /// A set of environments, e.g. where a flag is switched on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EnvironmentSet: u8 {
        const DEVELOPMENT = 1 << 0;
        const STAGING = 1 << 1;
        const PRODUCTION = 1 << 2;

        const ALL = Self::DEVELOPMENT.bits() | Self::STAGING.bits() | Self::PRODUCTION.bits();
    }
}

impl From<Environment> for EnvironmentSet {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => Self::DEVELOPMENT,
            Environment::Staging => Self::STAGING,
            Environment::Production => Self::PRODUCTION,
        }
    }
}

/// Per-environment values of a flag. One field per [`Environment`], so lookups are total.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EnvironmentValues {
    pub development: bool,
    pub staging: bool,
    pub production: bool,
}

impl EnvironmentValues {
    #[must_use]
    pub const fn new(development: bool, staging: bool, production: bool) -> Self {
        Self { development, staging, production }
    }

    /// Same value everywhere.
    #[must_use]
    pub const fn uniform(value: bool) -> Self {
        Self::new(value, value, value)
    }

    /// On in development only.
    #[must_use]
    pub const fn development_only() -> Self {
        Self::new(true, false, false)
    }

    #[must_use]
    pub const fn get(&self, env: Environment) -> bool {
        match env {
            Environment::Development => self.development,
            Environment::Staging => self.staging,
            Environment::Production => self.production,
        }
    }
}

/// A single flag definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
    /// Stable identifier, unique within a registry.
    pub name: &'static str,
    pub description: &'static str,
    pub category: FlagCategory,
    /// Used when no environment is known.
    pub default_value: bool,
    pub environments: EnvironmentValues,
    /// Names of flags this one is meaningful with. Declarative only: never enforced
    /// when the flag is evaluated.
    pub dependencies: &'static [&'static str],
    /// Advisory marker: eligible for compile-time dead-code elimination.
    pub build_time_optimization: bool,
}

impl FeatureFlag {
    /// Starts a definition that is off everywhere, with no dependencies.
    #[must_use]
    pub const fn new(
        name: &'static str,
        description: &'static str,
        category: FlagCategory,
    ) -> Self {
        Self {
            name,
            description,
            category,
            default_value: false,
            environments: EnvironmentValues::uniform(false),
            dependencies: &[],
            build_time_optimization: false,
        }
    }

    #[must_use]
    pub const fn default_value(mut self, value: bool) -> Self {
        self.default_value = value;
        self
    }

    #[must_use]
    pub const fn environments(mut self, environments: EnvironmentValues) -> Self {
        self.environments = environments;
        self
    }

    #[must_use]
    pub const fn depends_on(mut self, dependencies: &'static [&'static str]) -> Self {
        self.dependencies = dependencies;
        self
    }

    #[must_use]
    pub const fn build_time(mut self) -> Self {
        self.build_time_optimization = true;
        self
    }

    /// Value in `env`, or [`FeatureFlag::default_value`] when no environment is known.
    #[must_use]
    pub const fn value_for(&self, env: Option<Environment>) -> bool {
        match env {
            Some(env) => self.environments.get(env),
            None => self.default_value,
        }
    }

    /// Environments where the flag is on.
    #[must_use]
    pub fn enabled_in(&self) -> EnvironmentSet {
        let mut set = EnvironmentSet::empty();
        set.set(EnvironmentSet::DEVELOPMENT, self.environments.development);
        set.set(EnvironmentSet::STAGING, self.environments.staging);
        set.set(EnvironmentSet::PRODUCTION, self.environments.production);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    const SAMPLE: FeatureFlag = FeatureFlag::new("searchModal", "Site search", FlagCategory::Ui)
        .default_value(true)
        .environments(EnvironmentValues::new(true, true, false))
        .depends_on(&["themeSwitcher"]);

    #[test]
    fn environment_values_are_total() {
        let values = EnvironmentValues::new(true, false, true);
        let seen: Vec<bool> = Environment::iter().map(|e| values.get(e)).collect();
        assert_eq!(seen, vec![true, false, true]);
    }

    #[test]
    fn value_for_falls_back_to_default() {
        assert!(SAMPLE.value_for(None));
        assert!(!SAMPLE.value_for(Some(Environment::Production)));
        assert!(SAMPLE.value_for(Some(Environment::Staging)));
    }

    #[test]
    fn enabled_in_matches_environments() {
        let set = SAMPLE.enabled_in();
        assert!(set.contains(EnvironmentSet::DEVELOPMENT | EnvironmentSet::STAGING));
        assert!(!set.contains(EnvironmentSet::PRODUCTION));
        assert_eq!(
            FeatureFlag::new("x", "", FlagCategory::Api)
                .environments(EnvironmentValues::uniform(true))
                .enabled_in(),
            EnvironmentSet::ALL
        );
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(Environment::from_str("Production").unwrap(), Environment::Production);
        assert_eq!(FlagCategory::from_str("experimental").unwrap(), FlagCategory::Experimental);
        assert!(Environment::from_str("qa").is_err());
        assert_eq!(Environment::Staging.to_string(), "staging");
    }

    #[test]
    fn environment_set_from_environment() {
        assert_eq!(EnvironmentSet::from(Environment::Staging), EnvironmentSet::STAGING);
    }
}
