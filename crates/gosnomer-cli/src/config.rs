//! Loading normalization options for the CLI.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gosnomer_model::NormalizationOptions;

/// Build options from an optional TOML file and `--prefer` flags.
///
/// Flag entries come first, so they take precedence over the file's
/// `preferred_formats`.
pub fn load_options(config: Option<&Path>, prefer: &[String]) -> Result<NormalizationOptions> {
    let mut options = NormalizationOptions::from_preferred(prefer)?;
    if let Some(path) = config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let file: NormalizationOptions = toml::from_str(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        options.preferred_formats.extend(file.preferred_formats);
    }
    tracing::debug!(
        preferred = ?options.preferred_formats,
        "loaded normalization options"
    );
    Ok(options)
}
