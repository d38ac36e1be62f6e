//! Swatch CLI
//!
//! Resolve theme configs to JSON and inspect colors from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swatch_color::{get_contrast_ratio, get_luminance, hex_to_rgb, rgb_to_hex};
use swatch_theme::{create_theme, get_contrast_text, PaletteMode};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(version, about = "Swatch design system CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a theme config file and print the theme as JSON
    Theme {
        /// Path to a .toml or .json theme config
        file: PathBuf,

        /// Override the palette mode (light or dark)
        #[arg(short, long)]
        mode: Option<PaletteMode>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show a color as rgb and hex with its luminance
    Color {
        /// Any supported CSS color: #hex, rgb(), hsl(), color()
        color: String,
    },

    /// Compute the contrast ratio between two colors
    Contrast {
        /// Text color
        foreground: String,
        /// Background color
        background: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Theme { file, mode, pretty } => cmd_theme(file, mode, pretty),
        Commands::Color { color } => cmd_color(&color),
        Commands::Contrast {
            foreground,
            background,
        } => cmd_contrast(&foreground, &background),
    }
}

fn cmd_theme(file: PathBuf, mode: Option<PaletteMode>, pretty: bool) -> Result<()> {
    let mut options = config::load_theme_options(&file)?;
    if let Some(mode) = mode {
        debug!("palette mode overridden to {mode}");
        options.palette.mode = Some(mode);
    }

    let theme = create_theme(&options, &[])
        .with_context(|| format!("Failed to build a theme from {}", file.display()))?;
    info!("resolved theme from {}", file.display());

    let value = theme.to_value()?;
    let output = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{output}");
    Ok(())
}

fn cmd_color(color: &str) -> Result<()> {
    let hex = rgb_to_hex(color).with_context(|| format!("Invalid color `{color}`"))?;
    let rgb = hex_to_rgb(&hex)?;
    let luminance = get_luminance(color)?;
    let contrast_text = get_contrast_text(color, swatch_theme::palette::DEFAULT_CONTRAST_THRESHOLD)?;

    println!("color:         {color}");
    println!("rgb:           {rgb}");
    println!("hex:           {hex}");
    println!("luminance:     {luminance}");
    println!("contrast text: {contrast_text}");
    Ok(())
}

/// WCAG 2 rating for a contrast ratio.
fn wcag_verdict(ratio: f64) -> &'static str {
    if ratio >= 7.0 {
        "AAA"
    } else if ratio >= 4.5 {
        "AA"
    } else if ratio >= 3.0 {
        "AA large text only"
    } else {
        "fail"
    }
}

fn cmd_contrast(foreground: &str, background: &str) -> Result<()> {
    let ratio = get_contrast_ratio(foreground, background)
        .with_context(|| format!("Cannot compare `{foreground}` with `{background}`"))?;
    println!("{ratio}:1 ({})", wcag_verdict(ratio));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_theme_flags() {
        let cli = Cli::try_parse_from(["swatch", "theme", "theme.toml", "--mode", "dark", "-p"])
            .unwrap();
        match cli.command {
            Commands::Theme { file, mode, pretty } => {
                assert_eq!(file, PathBuf::from("theme.toml"));
                assert_eq!(mode, Some(PaletteMode::Dark));
                assert!(pretty);
            }
            _ => panic!("expected the theme command"),
        }
        assert!(Cli::try_parse_from(["swatch", "theme", "t.toml", "--mode", "sepia"]).is_err());
    }

    #[test]
    fn verdicts() {
        assert_eq!(wcag_verdict(21.0), "AAA");
        assert_eq!(wcag_verdict(4.5), "AA");
        assert_eq!(wcag_verdict(3.93), "AA large text only");
        assert_eq!(wcag_verdict(1.0), "fail");
    }
}
