//! Conversions between color notations

use crate::error::Result;
use crate::model::{ColorFormat, ColorInput, ColorObject};
use crate::number::{format_number, round_half_up};
use crate::parse::{decompose_color, parse_hex};

/// Serialize a color object to CSS.
///
/// rgb channels are truncated to integers, hsl saturation and lightness get a
/// `%` suffix and a `color()` alpha is written as `/a`.
pub fn recompose_color(color: &ColorObject) -> String {
    let [c0, c1, c2] = color.channels();

    match color.format() {
        ColorFormat::Color => {
            let space = color.color_space().map(|s| s.as_str()).unwrap_or("srgb");
            let mut out = format!(
                "color({space} {} {} {}",
                format_number(c0),
                format_number(c1),
                format_number(c2)
            );
            if let Some(alpha) = color.alpha() {
                out.push_str(&format!(" /{}", format_number(alpha)));
            }
            out.push(')');
            out
        }
        format => {
            let mut parts = if format.is_hsl() {
                vec![
                    format_number(c0),
                    format!("{}%", format_number(c1)),
                    format!("{}%", format_number(c2)),
                ]
            } else {
                [c0, c1, c2]
                    .into_iter()
                    .map(|v| format_number(v.trunc()))
                    .collect()
            };
            parts.extend(color.alpha().map(format_number));
            format!("{format}({})", parts.join(", "))
        }
    }
}

/// Convert a `#` color to `rgb()`/`rgba()`.
///
/// ```
/// assert_eq!(swatch_color::hex_to_rgb("#9f3").unwrap(), "rgb(153, 255, 51)");
/// ```
pub fn hex_to_rgb(color: &str) -> Result<String> {
    let digits = color.trim().trim_start_matches('#');
    Ok(recompose_color(&parse_hex(color, digits)?))
}

/// Convert any supported color to `#rrggbb`, or `#rrggbbaa` when it carries
/// an alpha. Hex input is returned unchanged.
pub fn rgb_to_hex<'a>(color: impl Into<ColorInput<'a>>) -> Result<String> {
    let input = color.into();
    if let ColorInput::Css(css) = &input {
        if css.starts_with('#') {
            return Ok(css.to_string());
        }
    }

    let decomposed = decompose_color(input)?;
    let rgb = to_rgb_object(&decomposed);
    let scale = if rgb.format() == ColorFormat::Color {
        255.0
    } else {
        1.0
    };

    let mut hex = String::with_capacity(9);
    hex.push('#');
    for channel in rgb.channels() {
        hex.push_str(&int_to_hex(channel * scale));
    }
    if let Some(alpha) = rgb.alpha() {
        hex.push_str(&int_to_hex(round_half_up(255.0 * alpha)));
    }
    Ok(hex)
}

fn int_to_hex(value: f64) -> String {
    format!("{:02x}", value.trunc().clamp(0.0, 255.0) as u8)
}

/// Convert an hsl color to `rgb()`/`rgba()`. Other formats are returned
/// recomposed but otherwise unchanged.
pub fn hsl_to_rgb<'a>(color: impl Into<ColorInput<'a>>) -> Result<String> {
    let color = decompose_color(color)?;
    Ok(recompose_color(&to_rgb_object(&color)))
}

/// rgb form of an hsl color; other formats pass through.
pub(crate) fn to_rgb_object(color: &ColorObject) -> ColorObject {
    if !color.format().is_hsl() {
        return color.clone();
    }

    let [h, s, l] = color.channels();
    let s = s / 100.0;
    let l = l / 100.0;
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };

    let [r, g, b] = [f(0.0), f(8.0), f(4.0)].map(|v| round_half_up(v * 255.0));
    match color.alpha() {
        Some(alpha) => ColorObject::rgba(r, g, b, alpha),
        None => ColorObject::rgb(r, g, b),
    }
}

/// Space separated channels for use inside CSS custom properties, e.g.
/// `hsl(170, 45%, 50%)` → `170 45% 50%`.
pub fn color_channel<'a>(color: impl Into<ColorInput<'a>>) -> Result<String> {
    let color = decompose_color(color)?;
    let hsl = color.format().is_hsl();
    Ok(color
        .channels()
        .iter()
        .enumerate()
        .map(|(i, value)| {
            if hsl && i != 0 {
                format!("{}%", format_number(*value))
            } else {
                format_number(*value)
            }
        })
        .collect::<Vec<_>>()
        .join(" "))
}
