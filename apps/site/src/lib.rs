//! # Folio Site Tool
//!
//! The `folio` binary: exports feature flags for builds, renders dashboards and reports on
//! content taxonomy. Configuration comes from `folio.*` plus `FOLIO__*` overrides.

pub mod handlers;
pub mod models;

use crate::handlers::dashboard::RenderOptions;
use crate::handlers::{content, dashboard, flags};
use crate::models::args::{AppCommands, Cli, ContentAction, DashboardAction, FlagAction};
use anyhow::{Context, Result};
use folio::content::Taxonomy;
use folio::domain::config::{LoggingConfig, SiteConfig};
use folio_logger::{LevelFilter, Logger};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const LOGGER_NAME: &str = "folio";

/// Installs the logger described by `cfg`.
///
/// # Errors
/// Returns an error if the level or filter is invalid or the log directory is unusable.
pub fn init_logging(cfg: &LoggingConfig) -> Result<Logger> {
    let level = cfg
        .level
        .parse::<LevelFilter>()
        .with_context(|| format!("Invalid logging.level '{}'", cfg.level))?;

    let mut builder = Logger::builder().name(LOGGER_NAME).level(level);
    if let Some(filter) = &cfg.filter {
        builder = builder.env_filter(filter);
    }

    let logger = match &cfg.path {
        Some(path) => builder.path(path).json(cfg.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

/// Resolves an `--output` path: relative paths land under `site.output_dir`.
#[must_use]
pub fn output_path(site: &SiteConfig, output: &Path) -> PathBuf {
    site.site.output_dir.join(output)
}

/// Fails when `slice` was not compiled into the facade.
fn require_slice(slice: &str) -> Result<()> {
    anyhow::ensure!(
        folio::features::is_enabled(slice),
        "The '{slice}' slice is not enabled in this build"
    );
    Ok(())
}

/// Executes one parsed command against `site`, writing results to `out`.
///
/// # Errors
/// Returns an error if a handler fails.
pub fn run(cli: Cli, site: &SiteConfig, out: &mut impl Write) -> Result<ExitCode> {
    match cli.command {
        AppCommands::Flags { action } => match action {
            FlagAction::List { env, category, json } => {
                let env = env.unwrap_or(site.site.environment);
                flags::list(out, &site.site.title, env, category, json)?;
            },
            FlagAction::Validate {} => {
                if !flags::validate(out)? {
                    return Ok(ExitCode::FAILURE);
                }
            },
            FlagAction::EnvFile { env, output } => {
                let output = output.map(|p| output_path(site, &p));
                flags::env_file(out, env, output.as_deref())?;
            },
            FlagAction::Defines { env } => flags::defines(out, env)?,
        },
        AppCommands::Dashboard { action } => match action {
            DashboardAction::Render { config, mode, symbol, aspect_ratio, output } => {
                require_slice("dashboard")?;
                let output = output.map(|p| output_path(site, &p));
                let options = RenderOptions { mode, symbol, aspect_ratio, output: output.as_deref() };
                dashboard::render(out, site, &config, options)?;
            },
        },
        AppCommands::Content { action } => {
            require_slice("content")?;
            match action {
                ContentAction::Tags { posts, json } => {
                    content::terms(out, &posts, Taxonomy::Tags, json)?;
                },
                ContentAction::Categories { posts, json } => {
                    content::terms(out, &posts, Taxonomy::Categories, json)?;
                },
                ContentAction::Similar { posts, slug, limit } => {
                    content::similar(out, &posts, &slug, limit)?;
                },
            }
        },
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
