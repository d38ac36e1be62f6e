//! Theme composition
//!
//! A theme is assembled from typed sections in a fixed order and then merged
//! with caller overrides:
//!
//! ```text
//! breakpoints, direction, components, spacing, shape
//!   <- palette <- mixins <- typography <- transitions <- shadows <- zIndex
//!   <- extra option keys <- overrides[0] <- overrides[1] ...
//! ```
//!
//! Overrides are plain JSON trees. They are deep-merged into the serialized
//! theme and the result is read back into the typed [`Theme`], so an override
//! may add arbitrary keys but cannot break the shape of a typed section.
//! Merged breakpoints are resolved again, so their keys stay sorted by value
//! and the toolbar mixin follows them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use swatch_core::{deep_merge, deep_merge_in_place, get_path_with_vars};
use tracing::debug;

use crate::breakpoints::{create_breakpoints, Breakpoints, BreakpointsOptions};
use crate::components::Components;
use crate::error::{Result, ThemeError};
use crate::mixins::{create_mixins, Mixins};
use crate::palette::{create_palette, Palette, PaletteOptions};
use crate::shadows::create_shadows;
use crate::shape::{create_shape, Shape, ShapeOptions};
use crate::spacing::{create_spacing, Spacing, SpacingOptions};
use crate::transitions::{create_transitions, Transitions, TransitionsOptions};
use crate::typography::{create_typography, Typography, TypographyInput};
use crate::z_index::{create_z_index, ZIndex, ZIndexOptions};

/// Key reserved for CSS variables support.
const RESERVED_VARS_KEY: &str = "vars";

/// Text direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Partial theme configuration. Unknown keys are kept in `extra` and merged
/// over the built theme.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOptions {
    pub breakpoints: BreakpointsOptions,
    pub direction: Option<Direction>,
    pub palette: PaletteOptions,
    pub spacing: Option<SpacingOptions>,
    pub shape: ShapeOptions,
    pub mixins: Map<String, Value>,
    pub components: Components,
    pub typography: TypographyInput,
    pub transitions: TransitionsOptions,
    pub shadows: Option<Vec<String>>,
    pub z_index: ZIndexOptions,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A fully resolved theme. Read-only once built.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub breakpoints: Breakpoints,
    pub direction: Direction,
    pub components: Components,
    #[serde(skip)]
    pub spacing: Spacing,
    pub shape: Shape,
    pub palette: Palette,
    pub mixins: Mixins,
    pub typography: Typography,
    pub transitions: Transitions,
    pub shadows: Vec<String>,
    pub z_index: ZIndex,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Theme {
    fn default() -> Self {
        build_sections(&ThemeOptions::default(), Breakpoints::default())
    }
}

// Spacing is a function; themes compare by their data.
impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        self.to_value().ok() == other.to_value().ok()
    }
}

impl Theme {
    /// JSON form of the theme. `spacing` and `typography.pxToRem` are functions
    /// and are left out.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(ThemeError::Serialize)
    }

    /// Look up a dot separated path such as `palette.primary.main`. A `vars`
    /// tree merged in by an override is searched first.
    pub fn lookup(&self, path: &str) -> Option<Value> {
        let tree = self.to_value().ok()?;
        get_path_with_vars(&tree, path).cloned()
    }
}

fn build_sections(options: &ThemeOptions, breakpoints: Breakpoints) -> Theme {
    let palette = create_palette(&options.palette);
    let mixins = create_mixins(&breakpoints, &options.mixins);
    let typography = create_typography(&palette, &options.typography);

    Theme {
        direction: options.direction.unwrap_or_default(),
        components: options.components.clone(),
        spacing: create_spacing(options.spacing.clone().unwrap_or_default()),
        shape: create_shape(&options.shape),
        palette,
        mixins,
        typography,
        transitions: create_transitions(&options.transitions),
        shadows: create_shadows(options.shadows.clone()),
        z_index: create_z_index(&options.z_index),
        extra: Map::new(),
        breakpoints,
    }
}

/// Build a theme from `options`, then deep-merge each of `overrides` on top,
/// left to right.
///
/// ```rust
/// use serde_json::json;
/// use swatch_theme::{create_theme, ThemeOptions};
///
/// let theme = create_theme(
///     &ThemeOptions::default(),
///     &[json!({ "palette": { "primary": { "main": "#000" } } })],
/// )
/// .unwrap();
/// assert_eq!(theme.palette.primary.main, "#000");
/// assert_eq!(theme.palette.primary.light, "#42a5f5");
/// ```
pub fn create_theme(options: &ThemeOptions, overrides: &[Value]) -> Result<Theme> {
    if options.extra.contains_key(RESERVED_VARS_KEY) {
        return Err(ThemeError::ReservedFieldCollision);
    }

    let theme = build_sections(options, create_breakpoints(&options.breakpoints)?);
    if options.extra.is_empty() && overrides.is_empty() {
        return Ok(theme);
    }
    debug!(
        "create_theme: merging {} extra keys and {} overrides",
        options.extra.len(),
        overrides.len()
    );

    let mut tree = theme.to_value()?;
    deep_merge_in_place(&mut tree, Value::Object(options.extra.clone()));
    let tree = overrides
        .iter()
        .fold(tree, |tree, override_tree| deep_merge(&tree, override_tree));

    let mut merged: Theme = serde_json::from_value(tree).map_err(ThemeError::MalformedOverride)?;
    merged.breakpoints = create_breakpoints(&BreakpointsOptions {
        values: Some(merged.breakpoints.values),
        unit: Some(merged.breakpoints.unit),
        step: Some(merged.breakpoints.step),
    })?;
    if merged.breakpoints != theme.breakpoints {
        debug!("create_theme: breakpoints changed, rebuilding mixins");
        merged.mixins = rebuild_mixins(options, overrides, &merged.breakpoints)?;
    }
    merged.spacing = theme.spacing;
    merged.typography.px_to_rem = theme.typography.px_to_rem;
    Ok(merged)
}

/// Mixins for the final breakpoints with every `mixins` layer replayed on top.
fn rebuild_mixins(
    options: &ThemeOptions,
    overrides: &[Value],
    breakpoints: &Breakpoints,
) -> Result<Mixins> {
    let mut tree = serde_json::to_value(create_mixins(breakpoints, &options.mixins))
        .map_err(ThemeError::Serialize)?;
    let layers = options
        .extra
        .get("mixins")
        .into_iter()
        .chain(overrides.iter().filter_map(|layer| layer.get("mixins")));
    for layer in layers {
        deep_merge_in_place(&mut tree, layer.clone());
    }
    serde_json::from_value(tree).map_err(ThemeError::MalformedOverride)
}
