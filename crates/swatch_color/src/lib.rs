//! Swatch Color
//!
//! Parsing, conversion and arithmetic for CSS colors. Supported notations:
//!
//! - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb()`, `rgba()`, `hsl()`, `hsla()`
//! - CSS Color 4 `color(<space> r g b [/ a])` in `srgb`, `display-p3`,
//!   `a98-rgb`, `prophoto-rgb` and `rec-2020`
//!
//! Every operation accepts either a CSS string or a decomposed
//! [`ColorObject`] and returns a new value.
//!
//! # Example
//!
//! ```rust
//! use swatch_color::{darken, get_contrast_ratio, lighten};
//!
//! let hover = darken("#1976d2", 0.2).unwrap();
//! assert_eq!(hover, "rgb(20, 94, 168)");
//!
//! let subtle = lighten("rgb(0, 0, 0)", 0.1).unwrap();
//! assert_eq!(subtle, "rgb(25, 25, 25)");
//!
//! assert!(get_contrast_ratio("#fff", "#1976d2").unwrap() > 4.5);
//! ```

pub mod convert;
pub mod error;
pub mod manipulate;
pub mod model;
pub mod number;
pub mod parse;
pub mod safe;

pub use convert::{color_channel, hex_to_rgb, hsl_to_rgb, recompose_color, rgb_to_hex};
pub use error::{ColorError, Result};
pub use manipulate::{
    alpha, darken, emphasize, get_contrast_ratio, get_luminance, lighten, DEFAULT_EMPHASIS,
};
pub use model::{ColorFormat, ColorInput, ColorObject, ColorSpace};
pub use number::{format_number, parse_leading_number, round_half_up, round_to};
pub use parse::decompose_color;
pub use safe::{safe_darken, safe_hex_to_rgb, safe_lighten, safe_recompose_color};
