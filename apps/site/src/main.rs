use anyhow::Context;
use clap::Parser;
use folio::domain::config::SiteConfig;
use folio::kernel::config::{load_config, load_config_or_default};
use folio_site::models::args::Cli;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // An explicit --config must exist; the implicit `folio.*` is optional.
    let cfg: SiteConfig = match cli.config.as_deref() {
        Some(path) => load_config(Some(path)),
        None => load_config_or_default(None::<&str>),
    }
    .context("Critical: Configuration is malformed")?;

    let _log = folio_site::init_logging(&cfg.logging)?;

    folio_site::run(cli, &cfg, &mut std::io::stdout().lock())
}
