use crate::naming::env_var_name;
use crate::registry::FlagRegistry;
use folio_domain::flags::Environment;
use tracing::warn;

/// Supplies raw override values keyed by environment variable name.
pub trait OverrideSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads overrides from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl OverrideSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<F> OverrideSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Resolves flags for one environment, letting `PUBLIC_FEATURE_*` values win over the
/// registry table.
#[derive(Debug, Clone, Copy)]
pub struct FlagResolver<'a, S = ProcessEnv> {
    registry: FlagRegistry<'a>,
    environment: Environment,
    overrides: S,
}

impl<'a> FlagResolver<'a> {
    #[must_use]
    pub const fn new(registry: FlagRegistry<'a>, environment: Environment) -> Self {
        Self { registry, environment, overrides: ProcessEnv }
    }
}

impl<'a, S: OverrideSource> FlagResolver<'a, S> {
    /// Replaces the override source.
    #[must_use]
    pub fn with_overrides<T: OverrideSource>(self, overrides: T) -> FlagResolver<'a, T> {
        FlagResolver { registry: self.registry, environment: self.environment, overrides }
    }

    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Effective value of `name`. Unknown flags are off; unparsable overrides are ignored.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        let Some(flag) = self.registry.get(name) else {
            return false;
        };
        let configured = flag.environments.get(self.environment);

        let key = env_var_name(flag.name);
        match self.overrides.get(&key) {
            None => configured,
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                warn!(variable = %key, value = %raw, "Ignoring unparsable flag override");
                configured
            }),
        }
    }

    /// Effective values of every flag, in registry order.
    #[must_use]
    pub fn resolve_all(&self) -> Vec<(&'a str, bool)> {
        self.registry.flags().iter().map(|f| (f.name, self.is_enabled(f.name))).collect()
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}
