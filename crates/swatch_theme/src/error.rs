//! Theme error types

use swatch_color::ColorError;
use thiserror::Error;

/// Errors raised while expanding palette colors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaletteError {
    #[error(
        "The color ({name}) provided to augment_color is invalid. \
         The color object needs to have color.main or color[{shade}] value"
    )]
    MissingMainColor { name: String, shade: String },

    #[error(
        "The color ({name}) provided to augment_color is invalid. \
         color.main should be a string, but `{value}` was provided instead"
    )]
    InvalidMainColorType { name: String, value: String },

    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Errors raised by media query generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BreakpointError {
    #[error("Unknown breakpoint `{0}`. Custom breakpoints need a numeric value")]
    UnknownBreakpoint(String),

    #[error("Breakpoint `{key}` must be a non-negative number, got {value}")]
    InvalidValue { key: String, value: f64 },
}

/// Errors raised while composing a theme.
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("`vars` is a private field used for CSS variables support. Please use another name")]
    ReservedFieldCollision,

    #[error("theme override does not fit the theme shape: {0}")]
    MalformedOverride(#[source] serde_json::Error),

    #[error(transparent)]
    Breakpoint(#[from] BreakpointError),

    #[error("failed to serialize theme: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid JSON theme config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML theme config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for theme composition
pub type Result<T> = std::result::Result<T, ThemeError>;
