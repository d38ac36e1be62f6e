//! Palette builder
//!
//! Expands partial palette options into a complete [`Palette`]: the six
//! semantic roles (each with `main`, `light`, `dark` and `contrastText`), the
//! grey scale, and the text/background/action tokens of the active mode.
//!
//! Role colors come from caller options when they can be augmented, and from
//! the built-in Material defaults otherwise:
//!
//! ```rust
//! use swatch_theme::palette::{create_palette, PaletteColorOptions, PaletteOptions};
//!
//! let palette = create_palette(&PaletteOptions {
//!     primary: Some(PaletteColorOptions::main("#3f51b5")),
//!     ..Default::default()
//! });
//!
//! assert_eq!(palette.primary.main, "#3f51b5");
//! assert_eq!(palette.primary.light, "rgb(101, 115, 195)");
//! assert_eq!(palette.secondary.main, "#9c27b0");
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use swatch_color::{darken, get_contrast_ratio, lighten, ColorError};
use swatch_core::deep_merge_in_place;
use tracing::{debug, warn};

use crate::colors::{self, MaterialColor, ModeTokens};
use crate::error::PaletteError;

pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 3.0;
pub const DEFAULT_TONAL_OFFSET: f64 = 0.2;

/// WCAG absolute minimum contrast for text.
const MIN_CONTRAST: f64 = 3.0;

/// Light or dark palette.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    #[default]
    Light,
    Dark,
}

impl PaletteMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn tokens(self) -> &'static ModeTokens {
        match self {
            Self::Light => &colors::LIGHT,
            Self::Dark => &colors::DARK,
        }
    }
}

impl FromStr for PaletteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("The palette mode `{other}` is not supported")),
        }
    }
}

impl Display for PaletteMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Unsupported modes fall back to light instead of failing the whole config.
impl<'de> Deserialize<'de> for PaletteMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_else(|message: String| {
            if cfg!(debug_assertions) {
                warn!("{message}");
            }
            PaletteMode::Light
        }))
    }
}

/// Shift applied to `main` when deriving `light` and `dark`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TonalOffset {
    /// `light = t`, `dark = t * 1.5`
    Uniform(f64),
    Split { light: f64, dark: f64 },
}

impl TonalOffset {
    pub fn light(&self) -> f64 {
        match *self {
            Self::Uniform(t) => t,
            Self::Split { light, .. } => light,
        }
    }

    pub fn dark(&self) -> f64 {
        match *self {
            Self::Uniform(t) => t * 1.5,
            Self::Split { dark, .. } => dark,
        }
    }
}

impl Default for TonalOffset {
    fn default() -> Self {
        Self::Uniform(DEFAULT_TONAL_OFFSET)
    }
}

/// Semantic palette roles.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ColorRole {
    Primary,
    Secondary,
    Error,
    Warning,
    Info,
    Success,
}

impl ColorRole {
    pub const ALL: [ColorRole; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Success,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }

    /// Shade keys used when the role is given as a shade-indexed color.
    pub fn shade_keys(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Secondary => ("A400", "A200", "A700"),
            _ => ("500", "300", "700"),
        }
    }

    /// Built-in `(main, light, dark)` for the role in `mode`.
    pub fn default_shades(self, mode: PaletteMode) -> (&'static str, &'static str, &'static str) {
        let (table, shades): (&MaterialColor, [&str; 3]) = match (self, mode) {
            (Self::Primary, PaletteMode::Light) => (&colors::BLUE, ["700", "400", "800"]),
            (Self::Primary, PaletteMode::Dark) => (&colors::BLUE, ["200", "50", "400"]),
            (Self::Secondary, PaletteMode::Light) => (&colors::PURPLE, ["500", "300", "700"]),
            (Self::Secondary, PaletteMode::Dark) => (&colors::PURPLE, ["200", "50", "400"]),
            (Self::Error, PaletteMode::Light) => (&colors::RED, ["700", "400", "800"]),
            (Self::Error, PaletteMode::Dark) => (&colors::RED, ["500", "300", "700"]),
            (Self::Warning, PaletteMode::Light) => (&colors::ORANGE, ["800", "500", "900"]),
            (Self::Warning, PaletteMode::Dark) => (&colors::ORANGE, ["400", "300", "700"]),
            (Self::Info, PaletteMode::Light) => (&colors::LIGHT_BLUE, ["700", "500", "900"]),
            (Self::Info, PaletteMode::Dark) => (&colors::LIGHT_BLUE, ["400", "300", "700"]),
            (Self::Success, PaletteMode::Light) => (&colors::GREEN, ["800", "500", "900"]),
            (Self::Success, PaletteMode::Dark) => (&colors::GREEN, ["400", "300", "700"]),
        };
        (
            table.shade(shades[0]),
            table.shade(shades[1]),
            table.shade(shades[2]),
        )
    }
}

/// A fully expanded role color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    pub main: String,
    pub light: String,
    pub dark: String,
    pub contrast_text: String,
}

/// Seed color with optional explicit variants.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplePaletteColorOptions {
    /// Kept untyped so a non-string `main` can be reported precisely.
    pub main: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_text: Option<String>,
}

/// Caller input for a palette color.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PaletteColorOptions {
    /// `{ main, light?, dark?, contrastText? }`
    Simple(SimplePaletteColorOptions),
    /// `{ "50": .., "500": .., "A400": .. }`
    Shades(IndexMap<String, Value>),
}

/// True when the object has a `main` key and therefore describes a simple color.
pub fn is_simple_palette_color_options(object: &Map<String, Value>) -> bool {
    object.contains_key("main")
}

impl PaletteColorOptions {
    /// Simple options with only `main` set.
    pub fn main(color: impl Into<String>) -> Self {
        Self::Simple(SimplePaletteColorOptions {
            main: Value::String(color.into()),
            light: None,
            dark: None,
            contrast_text: None,
        })
    }

    /// Discriminate a JSON object with [`is_simple_palette_color_options`].
    pub fn from_object(object: Map<String, Value>) -> Self {
        if is_simple_palette_color_options(&object) {
            let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);
            Self::Simple(SimplePaletteColorOptions {
                light: text("light"),
                dark: text("dark"),
                contrast_text: text("contrastText"),
                main: object.get("main").cloned().unwrap_or(Value::Null),
            })
        } else {
            Self::Shades(object.into_iter().collect())
        }
    }
}

impl From<&MaterialColor> for PaletteColorOptions {
    fn from(color: &MaterialColor) -> Self {
        Self::Shades(
            color
                .shades()
                .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
                .collect(),
        )
    }
}

impl From<PaletteColor> for PaletteColorOptions {
    fn from(color: PaletteColor) -> Self {
        Self::Simple(SimplePaletteColorOptions {
            main: Value::String(color.main),
            light: Some(color.light),
            dark: Some(color.dark),
            contrast_text: Some(color.contrast_text),
        })
    }
}

impl<'de> Deserialize<'de> for PaletteColorOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(object) => Ok(Self::from_object(object)),
            other => Err(D::Error::custom(format!(
                "palette color must be an object with `main` or shade keys, got {other}"
            ))),
        }
    }
}

/// Arguments for [`augment_color`].
#[derive(Clone, Debug)]
pub struct AugmentColorOptions<'a> {
    pub color: &'a PaletteColorOptions,
    pub name: Option<&'a str>,
    pub main_shade: &'a str,
    pub light_shade: &'a str,
    pub dark_shade: &'a str,
    pub tonal_offset: TonalOffset,
    pub contrast_threshold: f64,
}

impl<'a> AugmentColorOptions<'a> {
    pub fn new(color: &'a PaletteColorOptions) -> Self {
        Self {
            color,
            name: None,
            main_shade: "500",
            light_shade: "300",
            dark_shade: "700",
            tonal_offset: TonalOffset::default(),
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
        }
    }

    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn shades(mut self, main: &'a str, light: &'a str, dark: &'a str) -> Self {
        self.main_shade = main;
        self.light_shade = light;
        self.dark_shade = dark;
        self
    }

    pub fn tonal_offset(mut self, tonal_offset: TonalOffset) -> Self {
        self.tonal_offset = tonal_offset;
        self
    }

    pub fn contrast_threshold(mut self, contrast_threshold: f64) -> Self {
        self.contrast_threshold = contrast_threshold;
        self
    }
}

/// Pick the text color with the better contrast against `background`.
///
/// White wins when its contrast ratio reaches `contrast_threshold`; otherwise
/// the light-mode primary text color is used. A winner below 3:1 is reported
/// in debug builds and still returned.
pub fn get_contrast_text(background: &str, contrast_threshold: f64) -> Result<String, ColorError> {
    let contrast_text = if get_contrast_ratio(background, colors::DARK.text_primary)?
        >= contrast_threshold
    {
        colors::DARK.text_primary
    } else {
        colors::LIGHT.text_primary
    };

    if cfg!(debug_assertions) {
        let contrast = get_contrast_ratio(background, contrast_text)?;
        if contrast < MIN_CONTRAST {
            warn!(
                "The contrast ratio of {contrast}:1 for {contrast_text} on {background} \
                 falls below the WCAG recommended absolute minimum contrast ratio of 3:1"
            );
        }
    }

    Ok(contrast_text.to_string())
}

/// Expand a seed color into `main`, `light`, `dark` and `contrastText`.
///
/// Explicit variants win. Missing ones are derived from `main` with the tonal
/// offset, and `contrastText` from [`get_contrast_text`].
pub fn augment_color(options: &AugmentColorOptions<'_>) -> Result<PaletteColor, PaletteError> {
    let name = options.name.unwrap_or_default();
    let missing_main = || PaletteError::MissingMainColor {
        name: name.to_string(),
        shade: options.main_shade.to_string(),
    };

    let (main, light, dark, contrast_text) = match options.color {
        PaletteColorOptions::Simple(simple) => {
            let main = match &simple.main {
                Value::Null => return Err(missing_main()),
                Value::String(main) if main.is_empty() => return Err(missing_main()),
                Value::String(main) => main.clone(),
                other => {
                    return Err(PaletteError::InvalidMainColorType {
                        name: name.to_string(),
                        value: other.to_string(),
                    })
                }
            };
            (
                main,
                simple.light.clone(),
                simple.dark.clone(),
                simple.contrast_text.clone(),
            )
        }
        PaletteColorOptions::Shades(shades) => {
            let shade = |key: &str| {
                shades
                    .get(key)
                    .and_then(Value::as_str)
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
            };
            let main = shade(options.main_shade).ok_or_else(missing_main)?;
            (
                main,
                shade(options.light_shade),
                shade(options.dark_shade),
                None,
            )
        }
    };

    let light = match light {
        Some(light) => light,
        None => lighten(main.as_str(), options.tonal_offset.light())?,
    };
    let dark = match dark {
        Some(dark) => dark,
        None => darken(main.as_str(), options.tonal_offset.dark())?,
    };
    let contrast_text = match contrast_text {
        Some(text) => text,
        None => get_contrast_text(&main, options.contrast_threshold)?,
    };

    Ok(PaletteColor {
        main,
        light,
        dark,
        contrast_text,
    })
}

/// [`augment_color`] that reports failures in debug builds and returns `None`.
pub fn safe_augment_color(options: &AugmentColorOptions<'_>) -> Option<PaletteColor> {
    match augment_color(options) {
        Ok(color) => Some(color),
        Err(error) => {
            if cfg!(debug_assertions) {
                warn!("{error}");
            }
            None
        }
    }
}

/// Common colors shared by both modes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonColors {
    pub black: String,
    pub white: String,
}

impl Default for CommonColors {
    fn default() -> Self {
        Self {
            black: colors::common::BLACK.to_string(),
            white: colors::common::WHITE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeText {
    pub primary: String,
    pub secondary: String,
    pub disabled: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeBackground {
    pub paper: String,
    pub default: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAction {
    pub active: String,
    pub hover: String,
    pub hover_opacity: f64,
    pub selected: String,
    pub selected_opacity: f64,
    pub disabled: String,
    pub disabled_background: String,
    pub disabled_opacity: f64,
    pub focus: String,
    pub focus_opacity: f64,
    pub activated_opacity: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<&ModeTokens> for TypeText {
    fn from(tokens: &ModeTokens) -> Self {
        Self {
            primary: tokens.text_primary.to_string(),
            secondary: tokens.text_secondary.to_string(),
            disabled: tokens.text_disabled.to_string(),
            icon: tokens.text_icon.map(str::to_string),
            extra: Map::new(),
        }
    }
}

impl From<&ModeTokens> for TypeBackground {
    fn from(tokens: &ModeTokens) -> Self {
        Self {
            paper: tokens.background_paper.to_string(),
            default: tokens.background_default.to_string(),
            extra: Map::new(),
        }
    }
}

impl From<&ModeTokens> for TypeAction {
    fn from(tokens: &ModeTokens) -> Self {
        Self {
            active: tokens.action_active.to_string(),
            hover: tokens.action_hover.to_string(),
            hover_opacity: tokens.action_hover_opacity,
            selected: tokens.action_selected.to_string(),
            selected_opacity: tokens.action_selected_opacity,
            disabled: tokens.action_disabled.to_string(),
            disabled_background: tokens.action_disabled_background.to_string(),
            disabled_opacity: tokens.action_disabled_opacity,
            focus: tokens.action_focus.to_string(),
            focus_opacity: tokens.action_focus_opacity,
            activated_opacity: tokens.action_activated_opacity,
            extra: Map::new(),
        }
    }
}

/// Partial palette configuration.
///
/// Keys other than the typed ones (`background`, `text`, brand colors, ...)
/// land in `extra` and are deep-merged over the built palette.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaletteOptions {
    pub mode: Option<PaletteMode>,
    pub contrast_threshold: Option<f64>,
    pub tonal_offset: Option<TonalOffset>,
    pub primary: Option<PaletteColorOptions>,
    pub secondary: Option<PaletteColorOptions>,
    pub error: Option<PaletteColorOptions>,
    pub warning: Option<PaletteColorOptions>,
    pub info: Option<PaletteColorOptions>,
    pub success: Option<PaletteColorOptions>,
    pub custom_colors: IndexMap<String, PaletteColorOptions>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaletteOptions {
    pub fn role(&self, role: ColorRole) -> Option<&PaletteColorOptions> {
        match role {
            ColorRole::Primary => self.primary.as_ref(),
            ColorRole::Secondary => self.secondary.as_ref(),
            ColorRole::Error => self.error.as_ref(),
            ColorRole::Warning => self.warning.as_ref(),
            ColorRole::Info => self.info.as_ref(),
            ColorRole::Success => self.success.as_ref(),
        }
    }
}

/// A resolved palette.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub common: CommonColors,
    pub mode: PaletteMode,
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub error: PaletteColor,
    pub warning: PaletteColor,
    pub info: PaletteColor,
    pub success: PaletteColor,
    pub grey: IndexMap<String, String>,
    pub contrast_threshold: f64,
    pub tonal_offset: TonalOffset,
    pub text: TypeText,
    pub divider: String,
    pub background: TypeBackground,
    pub action: TypeAction,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub custom_colors: IndexMap<String, PaletteColor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Palette {
    pub fn role(&self, role: ColorRole) -> &PaletteColor {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Error => &self.error,
            ColorRole::Warning => &self.warning,
            ColorRole::Info => &self.info,
            ColorRole::Success => &self.success,
        }
    }

    /// Text color for `background` using this palette's contrast threshold.
    pub fn get_contrast_text(&self, background: &str) -> Result<String, ColorError> {
        get_contrast_text(background, self.contrast_threshold)
    }

    /// Augment `color` with this palette's tonal offset and contrast
    /// threshold. Returns `None` when the color cannot be augmented.
    pub fn augment_color(
        &self,
        color: &PaletteColorOptions,
        name: &str,
        shades: Option<(&str, &str, &str)>,
    ) -> Option<PaletteColor> {
        let mut options = AugmentColorOptions::new(color)
            .name(name)
            .tonal_offset(self.tonal_offset)
            .contrast_threshold(self.contrast_threshold);
        if let Some((main, light, dark)) = shades {
            options = options.shades(main, light, dark);
        }
        safe_augment_color(&options)
    }

    /// A custom color registered through `customColors`.
    pub fn custom_color(&self, name: &str) -> Option<&PaletteColor> {
        let color = self.custom_colors.get(name);
        if color.is_none() && cfg!(debug_assertions) {
            warn!(
                "Could not find color name `{name}`. Assign color values in palette.customColors"
            );
        }
        color
    }
}

fn default_role_color(role: ColorRole, mode: PaletteMode, contrast_threshold: f64) -> PaletteColor {
    let (main, light, dark) = role.default_shades(mode);
    let contrast_text = get_contrast_text(main, contrast_threshold)
        .unwrap_or_else(|_| mode.tokens().text_primary.to_string());
    PaletteColor {
        main: main.to_string(),
        light: light.to_string(),
        dark: dark.to_string(),
        contrast_text,
    }
}

/// Build a palette from partial options.
///
/// Never fails: role overrides that cannot be augmented fall back to the
/// role defaults, and extra keys that would break the palette shape are
/// ignored. Both cases are reported in debug builds.
pub fn create_palette(options: &PaletteOptions) -> Palette {
    let mode = options.mode.unwrap_or_default();
    let contrast_threshold = options
        .contrast_threshold
        .unwrap_or(DEFAULT_CONTRAST_THRESHOLD);
    let tonal_offset = options.tonal_offset.unwrap_or_default();
    debug!("create_palette: mode={mode}");

    let resolve_role = |role: ColorRole| -> PaletteColor {
        options
            .role(role)
            .and_then(|color| {
                let (main, light, dark) = role.shade_keys();
                safe_augment_color(
                    &AugmentColorOptions::new(color)
                        .name(role.as_str())
                        .shades(main, light, dark)
                        .tonal_offset(tonal_offset)
                        .contrast_threshold(contrast_threshold),
                )
            })
            .unwrap_or_else(|| default_role_color(role, mode, contrast_threshold))
    };

    let custom_colors = options
        .custom_colors
        .iter()
        .filter_map(|(name, color)| {
            let augmented = safe_augment_color(
                &AugmentColorOptions::new(color)
                    .name(name)
                    .tonal_offset(tonal_offset)
                    .contrast_threshold(contrast_threshold),
            )?;
            Some((name.clone(), augmented))
        })
        .collect();

    let tokens = mode.tokens();
    let palette = Palette {
        common: CommonColors::default(),
        mode,
        primary: resolve_role(ColorRole::Primary),
        secondary: resolve_role(ColorRole::Secondary),
        error: resolve_role(ColorRole::Error),
        warning: resolve_role(ColorRole::Warning),
        info: resolve_role(ColorRole::Info),
        success: resolve_role(ColorRole::Success),
        grey: colors::GREY.to_map(),
        contrast_threshold,
        tonal_offset,
        text: TypeText::from(tokens),
        divider: tokens.divider.to_string(),
        background: TypeBackground::from(tokens),
        action: TypeAction::from(tokens),
        custom_colors,
        extra: Map::new(),
    };

    if options.extra.is_empty() {
        return palette;
    }
    merge_extra(palette, &options.extra)
}

fn merge_extra(palette: Palette, extra: &Map<String, Value>) -> Palette {
    let merged = serde_json::to_value(&palette).and_then(|mut tree| {
        deep_merge_in_place(&mut tree, Value::Object(extra.clone()));
        serde_json::from_value::<Palette>(tree)
    });

    match merged {
        Ok(merged) => merged,
        Err(error) => {
            if cfg!(debug_assertions) {
                warn!("Ignoring palette overrides that do not fit the palette shape: {error}");
            }
            palette
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn simple(value: Value) -> PaletteColorOptions {
        match value {
            Value::Object(object) => PaletteColorOptions::from_object(object),
            _ => unreachable!("test input must be an object"),
        }
    }

    #[test]
    fn type_guard_uses_main_key() {
        assert!(matches!(
            simple(json!({ "main": "#fff" })),
            PaletteColorOptions::Simple(_)
        ));
        assert!(matches!(
            simple(json!({ "main": null })),
            PaletteColorOptions::Simple(_)
        ));
        assert!(matches!(
            simple(json!({ "light": "#fff" })),
            PaletteColorOptions::Shades(_)
        ));
    }

    #[test]
    fn tonal_offset_variants() {
        assert_eq!(TonalOffset::Uniform(0.2).dark(), 0.30000000000000004);
        let split = TonalOffset::Split {
            light: 0.8,
            dark: 0.5,
        };
        assert_eq!((split.light(), split.dark()), (0.8, 0.5));
    }

    #[test]
    fn contrast_text_threshold() {
        assert_eq!(get_contrast_text("#1976d2", 3.0).unwrap(), "#fff");
        assert_eq!(
            get_contrast_text("#1976d2", 7.0).unwrap(),
            "rgba(0, 0, 0, 0.87)"
        );
        assert_eq!(
            get_contrast_text("#fefefe", 3.0).unwrap(),
            "rgba(0, 0, 0, 0.87)"
        );
    }

    #[test]
    fn augment_errors() {
        let empty = simple(json!({}));
        assert_eq!(
            augment_color(&AugmentColorOptions::new(&empty).name("indigo")),
            Err(PaletteError::MissingMainColor {
                name: "indigo".into(),
                shade: "500".into()
            })
        );

        let object_main = simple(json!({ "main": { "foo": "bar" } }));
        assert!(matches!(
            augment_color(&AugmentColorOptions::new(&object_main)),
            Err(PaletteError::InvalidMainColorType { .. })
        ));

        let bad_color = PaletteColorOptions::main("foo");
        assert!(matches!(
            augment_color(&AugmentColorOptions::new(&bad_color)),
            Err(PaletteError::Color(ColorError::InvalidColorFormat(_)))
        ));
        assert_eq!(safe_augment_color(&AugmentColorOptions::new(&bad_color)), None);
    }

    #[test]
    fn explicit_contrast_text_wins() {
        let color = simple(json!({ "main": "#ff5722", "contrastText": "#ffffff" }));
        let augmented = augment_color(&AugmentColorOptions::new(&color)).unwrap();
        assert_eq!(augmented.contrast_text, "#ffffff");
    }

    #[test]
    fn mode_deserializes_leniently() {
        let mode: PaletteMode = serde_json::from_value(json!("dark")).unwrap();
        assert_eq!(mode, PaletteMode::Dark);
        let mode: PaletteMode = serde_json::from_value(json!("sepia")).unwrap();
        assert_eq!(mode, PaletteMode::Light);
    }
}
