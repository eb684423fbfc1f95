use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the config file used when no path is given (`folio.toml`, `folio.yaml`, ...).
pub const DEFAULT_CONFIG: &str = "folio";

/// Prefix of environment overrides; nesting uses `__` (`FOLIO__SITE__ENVIRONMENT`).
pub const ENV_PREFIX: &str = "FOLIO";

#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `FOLIO__*` environment variables.
///
/// The file format is inferred from the extension; without one, the `config` crate tries
/// the supported extensions. When `path` is `None` the base name [`DEFAULT_CONFIG`] is used.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, an override is malformed, or the
/// merged values do not match `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_from(path, true)
}

/// Like [`load_config`], but a missing file is not an error: defaults plus environment
/// overrides are used instead.
///
/// # Errors
/// Returns [`ConfigError::Config`] if a present file or an override cannot be parsed into `T`.
pub fn load_config_or_default<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_from(path, false)
}

fn load_from<T>(path: Option<impl AsRef<Path>>, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    info!(path = %path.display(), required, "Loading config");

    Config::builder()
        .add_source(File::from(path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
