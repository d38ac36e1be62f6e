//! Typography builder
//!
//! Produces the thirteen Material type-scale variants from a base font size
//! and the html root font size. Sizes are emitted in `rem` through a
//! [`PxToRem`] converter so the scale follows user font settings.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use swatch_color::{format_number, round_to};
use swatch_core::deep_merge_in_place;
use tracing::warn;

use crate::css::CssValue;
use crate::palette::Palette;

pub const DEFAULT_FONT_FAMILY: &str = r#""Roboto", "Helvetica", "Arial", sans-serif"#;
pub const DEFAULT_FONT_SIZE: f64 = 14.0;
pub const DEFAULT_HTML_FONT_SIZE: f64 = 16.0;

/// Type-scale variant names.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Variant {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Subtitle1,
    Subtitle2,
    Body1,
    Body2,
    Button,
    Caption,
    Overline,
}

impl Variant {
    pub const ALL: [Variant; 13] = [
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::H5,
        Self::H6,
        Self::Subtitle1,
        Self::Subtitle2,
        Self::Body1,
        Self::Body2,
        Self::Button,
        Self::Caption,
        Self::Overline,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Subtitle1 => "subtitle1",
            Self::Subtitle2 => "subtitle2",
            Self::Body1 => "body1",
            Self::Body2 => "body2",
            Self::Button => "button",
            Self::Caption => "caption",
            Self::Overline => "overline",
        }
    }
}

#[derive(Clone, Copy)]
enum Weight {
    Light,
    Regular,
    Medium,
}

struct VariantMetrics {
    weight: Weight,
    size: f64,
    line_height: f64,
    letter_spacing: f64,
    uppercase: bool,
}

const fn metrics(
    weight: Weight,
    size: f64,
    line_height: f64,
    letter_spacing: f64,
    uppercase: bool,
) -> VariantMetrics {
    VariantMetrics {
        weight,
        size,
        line_height,
        letter_spacing,
        uppercase,
    }
}

// https://m2.material.io/design/typography/the-type-system.html
fn variant_metrics(variant: Variant) -> VariantMetrics {
    use Weight::*;
    match variant {
        Variant::H1 => metrics(Light, 96.0, 1.167, -1.5, false),
        Variant::H2 => metrics(Light, 60.0, 1.2, -0.5, false),
        Variant::H3 => metrics(Regular, 48.0, 1.167, 0.0, false),
        Variant::H4 => metrics(Regular, 34.0, 1.235, 0.25, false),
        Variant::H5 => metrics(Regular, 24.0, 1.334, 0.0, false),
        Variant::H6 => metrics(Medium, 20.0, 1.6, 0.15, false),
        Variant::Subtitle1 => metrics(Regular, 16.0, 1.75, 0.15, false),
        Variant::Subtitle2 => metrics(Medium, 14.0, 1.57, 0.1, false),
        Variant::Body1 => metrics(Regular, 16.0, 1.5, 0.15, false),
        Variant::Body2 => metrics(Regular, 14.0, 1.43, 0.15, false),
        Variant::Button => metrics(Medium, 14.0, 1.75, 0.4, true),
        Variant::Caption => metrics(Regular, 12.0, 1.66, 0.4, false),
        Variant::Overline => metrics(Regular, 12.0, 2.66, 1.0, true),
    }
}

/// Pixel to `rem` conversion.
#[derive(Clone)]
pub struct PxToRem(Arc<dyn Fn(f64) -> String + Send + Sync>);

impl PxToRem {
    /// `(px / html_font_size) * (font_size / 14)` in `rem`.
    pub fn new(font_size: f64, html_font_size: f64) -> Self {
        let coefficient = font_size / DEFAULT_FONT_SIZE;
        Self(Arc::new(move |px| {
            format!("{}rem", format_number((px / html_font_size) * coefficient))
        }))
    }

    pub fn custom<F>(convert: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(convert))
    }

    pub fn convert(&self, px: f64) -> String {
        (self.0)(px)
    }
}

impl Default for PxToRem {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE, DEFAULT_HTML_FONT_SIZE)
    }
}

impl Debug for PxToRem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("PxToRem(..)")
    }
}

/// CSS declarations for one text variant.
///
/// Known font properties are typed; anything else (`marginLeft`, nested
/// selectors) lives in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<CssValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypographyStyle {
    /// Overlay `other`: its set properties replace ours, extra keys deep-merge.
    pub fn merge(&mut self, other: &TypographyStyle) {
        fn overlay<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
            if source.is_some() {
                target.clone_from(source);
            }
        }
        overlay(&mut self.font_family, &other.font_family);
        overlay(&mut self.font_weight, &other.font_weight);
        overlay(&mut self.font_size, &other.font_size);
        overlay(&mut self.line_height, &other.line_height);
        overlay(&mut self.letter_spacing, &other.letter_spacing);
        overlay(&mut self.text_transform, &other.text_transform);

        for (key, value) in &other.extra {
            match self.extra.get_mut(key) {
                Some(existing) => deep_merge_in_place(existing, value.clone()),
                None => {
                    self.extra.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

// Non-numeric font metrics become NaN so the builder can report them and use
// the defaults.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(n.as_f64().unwrap_or(f64::NAN)),
        Some(_) => Some(f64::NAN),
    })
}

/// Partial typography configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyOptions {
    pub font_family: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub font_size: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub html_font_size: Option<f64>,
    pub font_weight_light: Option<CssValue>,
    pub font_weight_regular: Option<CssValue>,
    pub font_weight_medium: Option<CssValue>,
    pub font_weight_bold: Option<CssValue>,
    /// Applied to every variant before per-variant overrides.
    pub all_variants: Option<TypographyStyle>,
    pub h1: Option<TypographyStyle>,
    pub h2: Option<TypographyStyle>,
    pub h3: Option<TypographyStyle>,
    pub h4: Option<TypographyStyle>,
    pub h5: Option<TypographyStyle>,
    pub h6: Option<TypographyStyle>,
    pub subtitle1: Option<TypographyStyle>,
    pub subtitle2: Option<TypographyStyle>,
    pub body1: Option<TypographyStyle>,
    pub body2: Option<TypographyStyle>,
    pub button: Option<TypographyStyle>,
    pub caption: Option<TypographyStyle>,
    pub overline: Option<TypographyStyle>,
    #[serde(skip)]
    pub px_to_rem: Option<PxToRem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypographyOptions {
    pub fn variant(&self, variant: Variant) -> Option<&TypographyStyle> {
        match variant {
            Variant::H1 => self.h1.as_ref(),
            Variant::H2 => self.h2.as_ref(),
            Variant::H3 => self.h3.as_ref(),
            Variant::H4 => self.h4.as_ref(),
            Variant::H5 => self.h5.as_ref(),
            Variant::H6 => self.h6.as_ref(),
            Variant::Subtitle1 => self.subtitle1.as_ref(),
            Variant::Subtitle2 => self.subtitle2.as_ref(),
            Variant::Body1 => self.body1.as_ref(),
            Variant::Body2 => self.body2.as_ref(),
            Variant::Button => self.button.as_ref(),
            Variant::Caption => self.caption.as_ref(),
            Variant::Overline => self.overline.as_ref(),
        }
    }
}

/// Typography input: static options or a function of the resolved palette.
#[derive(Clone)]
pub enum TypographyInput {
    Static(TypographyOptions),
    FromPalette(Arc<dyn Fn(&Palette) -> TypographyOptions + Send + Sync>),
}

impl TypographyInput {
    pub fn from_palette<F>(build: F) -> Self
    where
        F: Fn(&Palette) -> TypographyOptions + Send + Sync + 'static,
    {
        Self::FromPalette(Arc::new(build))
    }

    fn resolve(&self, palette: &Palette) -> TypographyOptions {
        match self {
            Self::Static(options) => options.clone(),
            Self::FromPalette(build) => build(palette),
        }
    }
}

impl Default for TypographyInput {
    fn default() -> Self {
        Self::Static(TypographyOptions::default())
    }
}

// Config files can only carry static options.
impl<'de> Deserialize<'de> for TypographyInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TypographyOptions::deserialize(deserializer).map(Self::Static)
    }
}

impl From<TypographyOptions> for TypographyInput {
    fn from(options: TypographyOptions) -> Self {
        Self::Static(options)
    }
}

impl Debug for TypographyInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(options) => f.debug_tuple("Static").field(options).finish(),
            Self::FromPalette(_) => f.write_str("FromPalette(..)"),
        }
    }
}

/// Resolved typography.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub html_font_size: f64,
    #[serde(skip)]
    pub px_to_rem: PxToRem,
    pub font_family: String,
    pub font_size: f64,
    pub font_weight_light: CssValue,
    pub font_weight_regular: CssValue,
    pub font_weight_medium: CssValue,
    pub font_weight_bold: CssValue,
    pub h1: TypographyStyle,
    pub h2: TypographyStyle,
    pub h3: TypographyStyle,
    pub h4: TypographyStyle,
    pub h5: TypographyStyle,
    pub h6: TypographyStyle,
    pub subtitle1: TypographyStyle,
    pub subtitle2: TypographyStyle,
    pub body1: TypographyStyle,
    pub body2: TypographyStyle,
    pub button: TypographyStyle,
    pub caption: TypographyStyle,
    pub overline: TypographyStyle,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Typography {
    pub fn variant(&self, variant: Variant) -> &TypographyStyle {
        match variant {
            Variant::H1 => &self.h1,
            Variant::H2 => &self.h2,
            Variant::H3 => &self.h3,
            Variant::H4 => &self.h4,
            Variant::H5 => &self.h5,
            Variant::H6 => &self.h6,
            Variant::Subtitle1 => &self.subtitle1,
            Variant::Subtitle2 => &self.subtitle2,
            Variant::Body1 => &self.body1,
            Variant::Body2 => &self.body2,
            Variant::Button => &self.button,
            Variant::Caption => &self.caption,
            Variant::Overline => &self.overline,
        }
    }

    pub fn px_to_rem(&self, px: f64) -> String {
        self.px_to_rem.convert(px)
    }
}

impl PartialEq for Typography {
    fn eq(&self, other: &Self) -> bool {
        serde_json::to_value(self).ok() == serde_json::to_value(other).ok()
    }
}

fn font_metric(value: Option<f64>, default: f64, name: &str) -> f64 {
    match value {
        Some(value) if value.is_finite() => value,
        Some(_) => {
            if cfg!(debug_assertions) {
                warn!("`{name}` is required to be number type");
            }
            default
        }
        None => default,
    }
}

/// Build the typography scale for `palette`.
pub fn create_typography(palette: &Palette, input: &TypographyInput) -> Typography {
    let options = input.resolve(palette);

    let font_family = options
        .font_family
        .clone()
        .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string());
    let font_size = font_metric(options.font_size, DEFAULT_FONT_SIZE, "fontSize");
    let html_font_size = font_metric(
        options.html_font_size,
        DEFAULT_HTML_FONT_SIZE,
        "htmlFontSize",
    );
    let font_weight_light = options
        .font_weight_light
        .clone()
        .unwrap_or(CssValue::Number(300.0));
    let font_weight_regular = options
        .font_weight_regular
        .clone()
        .unwrap_or(CssValue::Number(400.0));
    let font_weight_medium = options
        .font_weight_medium
        .clone()
        .unwrap_or(CssValue::Number(500.0));
    let font_weight_bold = options
        .font_weight_bold
        .clone()
        .unwrap_or(CssValue::Number(700.0));

    let px_to_rem = options
        .px_to_rem
        .clone()
        .unwrap_or_else(|| PxToRem::new(font_size, html_font_size));

    let build_variant = |variant: Variant| -> TypographyStyle {
        let metrics = variant_metrics(variant);
        let font_weight = match metrics.weight {
            Weight::Light => font_weight_light.clone(),
            Weight::Regular => font_weight_regular.clone(),
            Weight::Medium => font_weight_medium.clone(),
        };
        // Letter spacing is tuned for Roboto and is left out for other families.
        let letter_spacing = (font_family == DEFAULT_FONT_FAMILY).then(|| {
            CssValue::Text(format!(
                "{}em",
                format_number(round_to(metrics.letter_spacing / metrics.size, 5))
            ))
        });

        let mut style = TypographyStyle {
            font_family: Some(font_family.clone()),
            font_weight: Some(font_weight),
            font_size: Some(CssValue::Text(px_to_rem.convert(metrics.size))),
            line_height: Some(CssValue::Number(metrics.line_height)),
            letter_spacing,
            text_transform: metrics.uppercase.then(|| "uppercase".to_string()),
            extra: Map::new(),
        };
        if let Some(all_variants) = &options.all_variants {
            style.merge(all_variants);
        }
        if let Some(overrides) = options.variant(variant) {
            style.merge(overrides);
        }
        style
    };

    Typography {
        html_font_size,
        px_to_rem: px_to_rem.clone(),
        font_family: font_family.clone(),
        font_size,
        font_weight_light: font_weight_light.clone(),
        font_weight_regular: font_weight_regular.clone(),
        font_weight_medium: font_weight_medium.clone(),
        font_weight_bold: font_weight_bold.clone(),
        h1: build_variant(Variant::H1),
        h2: build_variant(Variant::H2),
        h3: build_variant(Variant::H3),
        h4: build_variant(Variant::H4),
        h5: build_variant(Variant::H5),
        h6: build_variant(Variant::H6),
        subtitle1: build_variant(Variant::Subtitle1),
        subtitle2: build_variant(Variant::Subtitle2),
        body1: build_variant(Variant::Body1),
        body2: build_variant(Variant::Body2),
        button: build_variant(Variant::Button),
        caption: build_variant(Variant::Caption),
        overline: build_variant(Variant::Overline),
        extra: options.extra.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{create_palette, PaletteOptions};

    fn palette() -> Palette {
        create_palette(&PaletteOptions::default())
    }

    #[test]
    fn default_scale() {
        let typography = create_typography(&palette(), &TypographyInput::default());
        assert_eq!(typography.font_size, 14.0);
        assert_eq!(typography.h1.font_size, Some(CssValue::from("6rem")));
        assert_eq!(typography.h1.font_weight, Some(CssValue::Number(300.0)));
        assert_eq!(typography.h6.font_size, Some(CssValue::from("1.25rem")));
        assert_eq!(typography.caption.font_size, Some(CssValue::from("0.75rem")));
        assert_eq!(
            typography.button.text_transform.as_deref(),
            Some("uppercase")
        );
        assert_eq!(typography.body1.text_transform, None);
    }

    #[test]
    fn letter_spacing_rounding() {
        let typography = create_typography(&palette(), &TypographyInput::default());
        assert_eq!(
            typography.h1.letter_spacing,
            Some(CssValue::from("-0.01562em"))
        );
        assert_eq!(typography.h3.letter_spacing, Some(CssValue::from("0em")));
        assert_eq!(
            typography.h4.letter_spacing,
            Some(CssValue::from("0.00735em"))
        );
    }

    #[test]
    fn custom_html_font_size() {
        let input = TypographyInput::Static(TypographyOptions {
            html_font_size: Some(10.0),
            ..Default::default()
        });
        let typography = create_typography(&palette(), &input);
        assert_eq!(typography.h2.font_size, Some(CssValue::from("6rem")));
        assert_eq!(typography.px_to_rem(20.0), "2rem");
    }

    #[test]
    fn non_numeric_metrics_fall_back() {
        let options: TypographyOptions =
            serde_json::from_value(serde_json::json!({ "fontSize": "1", "htmlFontSize": "1" }))
                .unwrap();
        assert!(options.font_size.unwrap().is_nan());

        let typography = create_typography(&palette(), &options.into());
        assert_eq!(typography.font_size, 14.0);
        assert_eq!(typography.html_font_size, 16.0);
    }

    #[test]
    fn custom_converter() {
        let input = TypographyInput::Static(TypographyOptions {
            px_to_rem: Some(PxToRem::custom(|px| format!("{px}px"))),
            ..Default::default()
        });
        let typography = create_typography(&palette(), &input);
        assert_eq!(typography.body2.font_size, Some(CssValue::from("14px")));
    }

    #[test]
    fn style_merge_overlays_and_merges_extra() {
        let mut style = TypographyStyle {
            font_size: Some("1rem".into()),
            extra: serde_json::from_value(serde_json::json!({ "&:hover": { "color": "red" } }))
                .unwrap(),
            ..Default::default()
        };
        let other = TypographyStyle {
            font_size: Some("18px".into()),
            extra: serde_json::from_value(serde_json::json!({ "&:hover": { "opacity": 1 } }))
                .unwrap(),
            ..Default::default()
        };
        style.merge(&other);
        assert_eq!(style.font_size, Some(CssValue::from("18px")));
        assert_eq!(
            serde_json::Value::Object(style.extra),
            serde_json::json!({ "&:hover": { "color": "red", "opacity": 1 } })
        );
    }
}
