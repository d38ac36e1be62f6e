//! Decomposed color representation

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{ColorError, Result};

/// CSS functional color notation
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorFormat {
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    /// CSS Color 4 `color(<space> r g b [/ a])`
    Color,
}

impl ColorFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Color => "color",
        }
    }

    /// True for `hsl` and `hsla`.
    pub fn is_hsl(self) -> bool {
        matches!(self, Self::Hsl | Self::Hsla)
    }

    /// The format that carries an alpha channel (`rgb` → `rgba`, `hsl` → `hsla`).
    pub fn with_alpha(self) -> Self {
        match self {
            Self::Rgb => Self::Rgba,
            Self::Hsl => Self::Hsla,
            other => other,
        }
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            "hsl" => Ok(Self::Hsl),
            "hsla" => Ok(Self::Hsla),
            "color" => Ok(Self::Color),
            other => Err(ColorError::UnsupportedColorType(other.to_string())),
        }
    }
}

impl Display for ColorFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color spaces accepted by `color()`
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorSpace {
    Srgb,
    DisplayP3,
    A98Rgb,
    ProphotoRgb,
    Rec2020,
}

impl ColorSpace {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Srgb => "srgb",
            Self::DisplayP3 => "display-p3",
            Self::A98Rgb => "a98-rgb",
            Self::ProphotoRgb => "prophoto-rgb",
            Self::Rec2020 => "rec-2020",
        }
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "srgb" => Ok(Self::Srgb),
            "display-p3" => Ok(Self::DisplayP3),
            "a98-rgb" => Ok(Self::A98Rgb),
            "prophoto-rgb" => Ok(Self::ProphotoRgb),
            "rec-2020" => Ok(Self::Rec2020),
            other => Err(ColorError::InvalidColorSpace(other.to_string())),
        }
    }
}

impl Display for ColorSpace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed color: format, three channels and an optional alpha.
///
/// Channel meaning depends on the format: 0–255 for rgb, degrees and
/// percentages for hsl, 0–1 for `color()`. Channels are always finite.
/// Values are immutable; every transform builds a new object.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorObject {
    format: ColorFormat,
    channels: [f64; 3],
    alpha: Option<f64>,
    color_space: Option<ColorSpace>,
}

impl ColorObject {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(ColorFormat::Rgb, [r, g, b], None, None)
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(ColorFormat::Rgba, [r, g, b], Some(a), None)
    }

    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::new(ColorFormat::Hsl, [h, s, l], None, None)
    }

    pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self::new(ColorFormat::Hsla, [h, s, l], Some(a), None)
    }

    /// CSS Color 4 `color()` value
    pub fn color(space: ColorSpace, channels: [f64; 3], alpha: Option<f64>) -> Self {
        Self::new(ColorFormat::Color, channels, alpha, Some(space))
    }

    pub(crate) fn new(
        format: ColorFormat,
        channels: [f64; 3],
        alpha: Option<f64>,
        color_space: Option<ColorSpace>,
    ) -> Self {
        Self {
            format,
            channels,
            alpha,
            color_space,
        }
    }

    /// Build a color from loosely typed parts, validating every piece.
    ///
    /// `values` holds three channels plus an optional alpha. `color` formats
    /// require a color space.
    pub fn from_parts(format: &str, values: &[f64], color_space: Option<&str>) -> Result<Self> {
        let format: ColorFormat = format.parse()?;
        let color_space = color_space.map(str::parse::<ColorSpace>).transpose()?;
        let label = format!("{format}({values:?})");

        if format == ColorFormat::Color && color_space.is_none() {
            return Err(ColorError::InvalidColorSpace(String::new()));
        }

        validate_values(&label, format, values)?;
        Ok(Self::new(
            format,
            [values[0], values[1], values[2]],
            values.get(3).copied(),
            color_space,
        ))
    }

    pub fn format(&self) -> ColorFormat {
        self.format
    }

    pub fn channels(&self) -> [f64; 3] {
        self.channels
    }

    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    pub fn color_space(&self) -> Option<ColorSpace> {
        self.color_space
    }

    /// Channels followed by the alpha, if any (3 or 4 values).
    pub fn values(&self) -> Vec<f64> {
        let mut values = self.channels.to_vec();
        values.extend(self.alpha);
        values
    }

    pub(crate) fn with_channels(&self, channels: [f64; 3]) -> Self {
        Self { channels, ..*self }
    }

    pub(crate) fn with_alpha_value(&self, alpha: f64) -> Self {
        Self {
            format: self.format.with_alpha(),
            alpha: Some(alpha),
            ..*self
        }
    }
}

/// Check component count and finiteness for a decomposed color.
pub(crate) fn validate_values(color: &str, format: ColorFormat, values: &[f64]) -> Result<()> {
    if !(3..=4).contains(&values.len()) {
        return Err(ColorError::InvalidColorValue {
            color: color.to_string(),
            reason: format!(
                "`{format}` expects 3 or 4 components but got {}",
                values.len()
            ),
        });
    }

    if values.iter().any(|value| !value.is_finite()) {
        return Err(ColorError::InvalidColorValue {
            color: color.to_string(),
            reason: format!("`{format}` includes non-numeric components"),
        });
    }

    Ok(())
}

/// Anything a color operation accepts: a CSS color string or an already
/// decomposed [`ColorObject`].
#[derive(Clone, Debug)]
pub enum ColorInput<'a> {
    Css(&'a str),
    Object(Cow<'a, ColorObject>),
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Css(value)
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Css(value.as_str())
    }
}

impl From<ColorObject> for ColorInput<'_> {
    fn from(value: ColorObject) -> Self {
        Self::Object(Cow::Owned(value))
    }
}

impl<'a> From<&'a ColorObject> for ColorInput<'a> {
    fn from(value: &'a ColorObject) -> Self {
        Self::Object(Cow::Borrowed(value))
    }
}

impl Display for ColorInput<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Css(css) => f.write_str(css),
            Self::Object(object) => write!(f, "{}({:?})", object.format, object.values()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_round_trips_through_str() {
        for format in [
            ColorFormat::Rgb,
            ColorFormat::Rgba,
            ColorFormat::Hsl,
            ColorFormat::Hsla,
            ColorFormat::Color,
        ] {
            assert_eq!(format.as_str().parse::<ColorFormat>(), Ok(format));
        }
    }

    #[test]
    fn unknown_format_is_unsupported_type() {
        assert_eq!(
            "unknown type".parse::<ColorFormat>(),
            Err(ColorError::UnsupportedColorType("unknown type".into()))
        );
    }

    #[test]
    fn from_parts_validates() {
        let color = ColorObject::from_parts("color", &[0.5, 0.3, 0.2], Some("display-p3")).unwrap();
        assert_eq!(color.color_space(), Some(ColorSpace::DisplayP3));
        assert_eq!(color.values(), vec![0.5, 0.3, 0.2]);

        assert!(matches!(
            ColorObject::from_parts("rgb", &[1.0, 2.0], None),
            Err(ColorError::InvalidColorValue { .. })
        ));
        assert!(matches!(
            ColorObject::from_parts("rgb", &[1.0, f64::NAN, 3.0], None),
            Err(ColorError::InvalidColorValue { .. })
        ));
        assert!(matches!(
            ColorObject::from_parts("color", &[1.0, 0.0, 0.0], Some("foo")),
            Err(ColorError::InvalidColorSpace(_))
        ));
    }

    #[test]
    fn alpha_upgrades_format() {
        let color = ColorObject::hsl(0.0, 100.0, 50.0).with_alpha_value(0.1);
        assert_eq!(color.format(), ColorFormat::Hsla);
        assert_eq!(color.values(), vec![0.0, 100.0, 50.0, 0.1]);
    }
}
