//! CSS color string parsing

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ColorError, Result};
use crate::model::{validate_values, ColorFormat, ColorInput, ColorObject, ColorSpace};
use crate::number::{parse_leading_number, round_to};

/// `name(args)` with the whole argument list captured.
static FUNCTIONAL_NOTATION: OnceLock<Regex> = OnceLock::new();

fn functional_notation() -> &'static Regex {
    FUNCTIONAL_NOTATION.get_or_init(|| {
        Regex::new(r"^\s*([^()\s]*)\((.*)\)\s*$").expect("functional notation pattern is valid")
    })
}

/// Parse a color into its [`ColorObject`] form.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`,
/// `hsl()`, `hsla()` and `color(<space> r g b [/ a])`. An already decomposed
/// object is returned unchanged.
///
/// ```
/// use swatch_color::{decompose_color, ColorFormat};
///
/// let color = decompose_color("#f80").unwrap();
/// assert_eq!(color.format(), ColorFormat::Rgb);
/// assert_eq!(color.values(), vec![255.0, 136.0, 0.0]);
/// ```
pub fn decompose_color<'a>(color: impl Into<ColorInput<'a>>) -> Result<ColorObject> {
    match color.into() {
        ColorInput::Object(object) => Ok(object.into_owned()),
        ColorInput::Css(css) => parse_css(css),
    }
}

fn parse_css(css: &str) -> Result<ColorObject> {
    let trimmed = css.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(css, hex);
    }

    let captures = functional_notation()
        .captures(trimmed)
        .ok_or_else(|| ColorError::InvalidColorFormat(css.to_string()))?;
    let name = &captures[1];
    let args = &captures[2];

    let format: ColorFormat = name
        .parse()
        .map_err(|_| ColorError::InvalidColorFormat(css.to_string()))?;

    let (tokens, color_space): (Vec<&str>, Option<ColorSpace>) = if format == ColorFormat::Color {
        let mut parts = args.split_whitespace();
        let space = parts.next().unwrap_or_default().parse::<ColorSpace>()?;
        let tokens = parts
            .filter(|token| *token != "/")
            .map(|token| token.strip_prefix('/').unwrap_or(token))
            .collect();
        (tokens, Some(space))
    } else {
        (args.split(',').collect(), None)
    };

    let values: Vec<f64> = tokens.into_iter().map(parse_leading_number).collect();
    validate_values(css, format, &values)?;

    Ok(ColorObject::new(
        format,
        [values[0], values[1], values[2]],
        values.get(3).copied(),
        color_space,
    ))
}

/// Parse the digits after `#`. Shorthand digits are doubled; a fourth byte is
/// an alpha rounded to three decimals.
pub(crate) fn parse_hex(original: &str, digits: &str) -> Result<ColorObject> {
    let invalid = || ColorError::InvalidColorFormat(original.to_string());

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let bytes: Vec<u8> = match digits.len() {
        3 | 4 => digits
            .chars()
            .map(|c| {
                let nibble = c.to_digit(16).unwrap_or(0) as u8;
                nibble * 17
            })
            .collect(),
        6 | 8 => (0..digits.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&digits[i..i + 2], 16))
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };

    let [r, g, b] = [bytes[0], bytes[1], bytes[2]].map(f64::from);
    Ok(match bytes.get(3) {
        Some(&a) => ColorObject::rgba(r, g, b, round_to(f64::from(a) / 255.0, 3)),
        None => ColorObject::rgb(r, g, b),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_hex_shorthand() {
        let color = decompose_color("#9f3").unwrap();
        assert_eq!(color.format(), ColorFormat::Rgb);
        assert_eq!(color.values(), vec![153.0, 255.0, 51.0]);
    }

    #[test]
    fn converts_hex_with_alpha() {
        let color = decompose_color("#111111f8").unwrap();
        assert_eq!(color.format(), ColorFormat::Rgba);
        assert_eq!(color.values(), vec![17.0, 17.0, 17.0, 0.973]);
    }

    #[test]
    fn converts_rgba() {
        let color = decompose_color("rgba(255, 255, 255, 0.5)").unwrap();
        assert_eq!(color.format(), ColorFormat::Rgba);
        assert_eq!(color.values(), vec![255.0, 255.0, 255.0, 0.5]);
    }

    #[test]
    fn converts_hsl_with_percentages() {
        let color = decompose_color("hsl(100, 50%, 25%)").unwrap();
        assert_eq!(color.format(), ColorFormat::Hsl);
        assert_eq!(color.values(), vec![100.0, 50.0, 25.0]);
    }

    #[test]
    fn converts_color_function() {
        let color = decompose_color("color(display-p3 0.5 0.3 0.2)").unwrap();
        assert_eq!(color.format(), ColorFormat::Color);
        assert_eq!(color.color_space(), Some(ColorSpace::DisplayP3));
        assert_eq!(color.values(), vec![0.5, 0.3, 0.2]);

        let with_alpha = decompose_color("color(srgb 1 0 0 /0.4)").unwrap();
        assert_eq!(with_alpha.values(), vec![1.0, 0.0, 0.0, 0.4]);

        let spaced_alpha = decompose_color("color(srgb 1 0 0 / 0.4)").unwrap();
        assert_eq!(spaced_alpha.values(), vec![1.0, 0.0, 0.0, 0.4]);
    }

    #[test]
    fn leading_number_semantics() {
        let color = decompose_color("rgb(.5, 10px, 20)").unwrap();
        assert_eq!(color.values(), vec![0.5, 10.0, 20.0]);
    }

    #[test]
    fn keeps_function_name_with_extra_alpha() {
        let color = decompose_color("rgb(0, 0, 0, 0.5)").unwrap();
        assert_eq!(color.format(), ColorFormat::Rgb);
        assert_eq!(color.alpha(), Some(0.5));
    }

    #[test]
    fn idempotent_on_objects() {
        let color = decompose_color("hsla(20, 10%, 30%, 0.2)").unwrap();
        assert_eq!(decompose_color(&color).unwrap(), color);
    }

    #[test]
    fn rejects_unsupported_input() {
        assert!(matches!(
            decompose_color("hsv(0, 0, 0)"),
            Err(ColorError::InvalidColorFormat(_))
        ));
        assert!(matches!(
            decompose_color("red"),
            Err(ColorError::InvalidColorFormat(_))
        ));
        assert!(matches!(
            decompose_color("#12345"),
            Err(ColorError::InvalidColorFormat(_))
        ));
        assert!(matches!(
            decompose_color("#ggg"),
            Err(ColorError::InvalidColorFormat(_))
        ));
        assert_eq!(
            decompose_color("color(foo 0.5 0.5 0.5)"),
            Err(ColorError::InvalidColorSpace("foo".into()))
        );
        assert!(matches!(
            decompose_color("rgb(a, b, c)"),
            Err(ColorError::InvalidColorValue { .. })
        ));
        assert!(matches!(
            decompose_color("rgb(1, 2)"),
            Err(ColorError::InvalidColorValue { .. })
        ));
    }
}
