pub mod content;
pub mod dashboard;
pub mod flags;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes `content` to `output` when given, otherwise to `out`.
pub(crate) fn emit(out: &mut impl Write, output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Creating {}", parent.display()))?;
            }
            std::fs::write(path, content).with_context(|| format!("Writing {}", path.display()))?;
            info!(path = %path.display(), bytes = content.len(), "Wrote output");
        },
        None => out.write_all(content.as_bytes())?,
    }
    Ok(())
}
