use crate::constants::DEFAULT_SYMBOL;
use crate::flags::Environment;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration of the `folio` tool.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub logging: LoggingConfig,
    pub dashboards: DashboardsConfig,
}

/// Site identity and the deployment environment flags resolve against.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub title: String,
    pub environment: Environment,
    pub output_dir: PathBuf,
}

/// Logging knobs handed to the logger builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn`, `error` or `off`.
    pub level: String,
    /// Directory for rolling log files; console only when absent.
    pub path: Option<PathBuf>,
    pub json: bool,
    /// Explicit filter directive, overrides `RUST_LOG`.
    pub filter: Option<String>,
}

/// Dashboard rendering inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardsConfig {
    pub default_symbol: String,
    /// JSON fixture backing the fundamental view in development.
    pub fundamentals: Option<PathBuf>,
}

// --- Default ---

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Folio".to_owned(),
            environment: Environment::Development,
            output_dir: PathBuf::from("dist"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), path: None, json: false, filter: None }
    }
}

impl Default for DashboardsConfig {
    fn default() -> Self {
        Self { default_symbol: DEFAULT_SYMBOL.to_owned(), fundamentals: None }
    }
}
