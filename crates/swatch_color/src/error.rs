//! Color error types

use thiserror::Error;

/// Errors raised by color parsing and arithmetic.
///
/// All of these indicate a caller bug (a malformed color string or an
/// out-of-range argument) and abort the current operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The input matches none of the supported color grammars
    #[error(
        "Unsupported CSS color `{0}`. The following formats are supported: \
         #nnn, #nnnnnn, #nnnnnnnn, rgb(), rgba(), hsl(), hsla(), color()"
    )]
    InvalidColorFormat(String),

    /// `color()` names a color space outside the supported set
    #[error(
        "Unsupported `{0}` color space. The following color spaces are supported: \
         srgb, display-p3, a98-rgb, prophoto-rgb, rec-2020"
    )]
    InvalidColorSpace(String),

    /// A component could not be read as a number, or the component count is wrong
    #[error("Unsupported color values in `{color}`: {reason}")]
    InvalidColorValue { color: String, reason: String },

    /// The color type cannot be recomposed into a CSS string
    #[error("Unsupported color type `{0}`. Could not recompose color")]
    UnsupportedColorType(String),

    /// A coefficient or alpha value is outside its allowed range
    #[error("The value provided `{value}` is out of range [`{min}`, `{max}`]")]
    OutOfRangeCoefficient { value: f64, min: f64, max: f64 },
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;
