//! Luminance, contrast and color arithmetic

use crate::convert::{recompose_color, to_rgb_object};
use crate::error::{ColorError, Result};
use crate::model::{ColorFormat, ColorInput};
use crate::number::round_to;
use crate::parse::decompose_color;

/// Default coefficient used by [`emphasize`].
pub const DEFAULT_EMPHASIS: f64 = 0.15;

fn check_unit_range(value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::OutOfRangeCoefficient {
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

/// Relative luminance per WCAG 2.x, rounded to three decimals.
///
/// `0` is darkest black and `1` is lightest white.
pub fn get_luminance<'a>(color: impl Into<ColorInput<'a>>) -> Result<f64> {
    let color = to_rgb_object(&decompose_color(color)?);
    let scale = if color.format() == ColorFormat::Color {
        1.0
    } else {
        255.0
    };

    let [r, g, b] = color.channels().map(|value| srgb_to_linear(value / scale));

    Ok(round_to(0.2126 * r + 0.7152 * g + 0.0722 * b, 3))
}

/// sRGB gamma decode of one channel in `[0, 1]`.
fn srgb_to_linear(value: f64) -> f64 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Contrast ratio between two colors, between 1 and 21.
pub fn get_contrast_ratio<'a, 'b>(
    foreground: impl Into<ColorInput<'a>>,
    background: impl Into<ColorInput<'b>>,
) -> Result<f64> {
    let lum_a = get_luminance(foreground)?;
    let lum_b = get_luminance(background)?;
    Ok((lum_a.max(lum_b) + 0.05) / (lum_a.min(lum_b) + 0.05))
}

/// Set the alpha channel. rgb and hsl are upgraded to rgba and hsla.
///
/// ```
/// assert_eq!(
///     swatch_color::alpha("rgb(255, 0, 0)", 0.5).unwrap(),
///     "rgba(255, 0, 0, 0.5)"
/// );
/// ```
pub fn alpha<'a>(color: impl Into<ColorInput<'a>>, value: f64) -> Result<String> {
    let value = check_unit_range(value)?;
    let color = decompose_color(color)?;
    Ok(recompose_color(&color.with_alpha_value(value)))
}

/// Darken a color. `coefficient` is in `[0, 1]`.
pub fn darken<'a>(color: impl Into<ColorInput<'a>>, coefficient: f64) -> Result<String> {
    let k = check_unit_range(coefficient)?;
    let color = decompose_color(color)?;
    let [c0, c1, c2] = color.channels();

    let channels = if color.format().is_hsl() {
        [c0, c1, c2 * (1.0 - k)]
    } else {
        [c0, c1, c2].map(|v| v * (1.0 - k))
    };
    Ok(recompose_color(&color.with_channels(channels)))
}

/// Lighten a color. `coefficient` is in `[0, 1]`.
pub fn lighten<'a>(color: impl Into<ColorInput<'a>>, coefficient: f64) -> Result<String> {
    let k = check_unit_range(coefficient)?;
    let color = decompose_color(color)?;
    let [c0, c1, c2] = color.channels();

    let channels = match color.format() {
        ColorFormat::Hsl | ColorFormat::Hsla => [c0, c1, c2 + (100.0 - c2) * k],
        ColorFormat::Color => [c0, c1, c2].map(|v| v + (1.0 - v) * k),
        ColorFormat::Rgb | ColorFormat::Rgba => [c0, c1, c2].map(|v| v + (255.0 - v) * k),
    };
    Ok(recompose_color(&color.with_channels(channels)))
}

/// Darken light colors and lighten dark ones.
///
/// `coefficient` defaults to [`DEFAULT_EMPHASIS`].
pub fn emphasize<'a>(color: impl Into<ColorInput<'a>>, coefficient: Option<f64>) -> Result<String> {
    let coefficient = coefficient.unwrap_or(DEFAULT_EMPHASIS);
    let color = decompose_color(color)?;
    if get_luminance(&color)? > 0.5 {
        darken(&color, coefficient)
    } else {
        lighten(&color, coefficient)
    }
}
