//! Theme config file loading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use swatch_theme::{ConfigFormat, ThemeOptions};

/// Load theme options from a `.toml` or `.json` file.
pub fn load_theme_options(path: &Path) -> Result<ThemeOptions> {
    if !path.is_file() {
        anyhow::bail!("No theme config found at {}", path.display());
    }

    let Some(format) = ConfigFormat::from_path(path) else {
        anyhow::bail!(
            "Cannot tell the format of {}. Use a .toml or .json file",
            path.display()
        );
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    ThemeOptions::parse(&content, format)
        .with_context(|| format!("Failed to parse {}", path.display()))
}
