use super::emit;
use anyhow::{Context, Result};
use folio::dashboard::{DashboardProps, StaticFundamentals, render_dashboard};
use folio::domain::config::SiteConfig;
use folio::domain::dashboard::{AspectRatio, ColorMode, DashboardConfig};
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub struct RenderOptions<'a> {
    pub mode: ColorMode,
    pub symbol: Option<String>,
    pub aspect_ratio: AspectRatio,
    pub output: Option<&'a Path>,
}

/// Renders the dashboard described by `config_path` to HTML.
///
/// The fundamentals fixture from `dashboards.fundamentals`, when set, becomes the data
/// provider; the site environment decides whether it is used at all.
///
/// # Errors
/// Returns an error if the dashboard or fixture cannot be read or parsed, or if the output
/// cannot be written.
pub fn render(
    out: &mut impl Write,
    site: &SiteConfig,
    config_path: &Path,
    options: RenderOptions<'_>,
) -> Result<()> {
    let raw = std::fs::read_to_string(config_path)
        .with_context(|| format!("Reading dashboard {}", config_path.display()))?;
    let config: DashboardConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Parsing dashboard {}", config_path.display()))?;

    info!(id = %config.id, layout = %config.layout, charts = config.charts.len(), "Rendering dashboard");

    let symbol = options.symbol.unwrap_or_else(|| site.dashboards.default_symbol.clone());
    let mut props = DashboardProps::new(config)
        .with_mode(options.mode)
        .with_aspect_ratio(options.aspect_ratio)
        .with_environment(site.site.environment)
        .with_symbol(symbol);

    if let Some(path) = &site.dashboards.fundamentals {
        props = props.with_provider(StaticFundamentals::load(path)?);
    }

    emit(out, options.output, &render_dashboard(props))
}
