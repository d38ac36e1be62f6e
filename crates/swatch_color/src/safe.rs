//! Fail-soft wrappers
//!
//! Theme construction uses these where a malformed color should degrade to a
//! usable value rather than abort. Failures are logged in debug builds only.

use tracing::warn;

use crate::convert::{hex_to_rgb, recompose_color};
use crate::error::ColorError;
use crate::manipulate::{darken, lighten};
use crate::model::ColorObject;

fn report(operation: &str, warning: Option<&str>, error: &ColorError) {
    if cfg!(debug_assertions) {
        if let Some(warning) = warning {
            warn!("{warning}");
        }
        warn!("{operation} failed: {error}");
    }
}

/// [`darken`] that returns `color` unchanged on failure.
pub fn safe_darken(color: &str, coefficient: f64, warning: Option<&str>) -> String {
    darken(color, coefficient).unwrap_or_else(|error| {
        report("darken", warning, &error);
        color.to_string()
    })
}

/// [`lighten`] that returns `color` unchanged on failure.
pub fn safe_lighten(color: &str, coefficient: f64, warning: Option<&str>) -> String {
    lighten(color, coefficient).unwrap_or_else(|error| {
        report("lighten", warning, &error);
        color.to_string()
    })
}

/// [`hex_to_rgb`] that returns `color` unchanged on failure.
pub fn safe_hex_to_rgb(color: &str, warning: Option<&str>) -> String {
    hex_to_rgb(color).unwrap_or_else(|error| {
        report("hexToRgb", warning, &error);
        color.to_string()
    })
}

/// Recompose loosely typed color parts, or `None` when they do not describe a
/// supported color.
pub fn safe_recompose_color(
    format: &str,
    values: &[f64],
    color_space: Option<&str>,
    warning: Option<&str>,
) -> Option<String> {
    match ColorObject::from_parts(format, values, color_space) {
        Ok(color) => Some(recompose_color(&color)),
        Err(error) => {
            report("recomposeColor", warning, &error);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_input_on_failure() {
        assert_eq!(safe_darken("not a color", 0.5, None), "not a color");
        assert_eq!(safe_lighten("#fff", 4.0, Some("bad tonal offset")), "#fff");
        assert_eq!(safe_hex_to_rgb("#zz", None), "#zz");
    }

    #[test]
    fn passes_through_success() {
        assert_eq!(safe_darken("rgb(255, 255, 255)", 0.1, None), "rgb(229, 229, 229)");
        assert_eq!(safe_lighten("rgb(0, 0, 0)", 0.1, None), "rgb(25, 25, 25)");
        assert_eq!(safe_hex_to_rgb("#fff", None), "rgb(255, 255, 255)");
    }

    #[test]
    fn recompose_returns_none_for_unknown_type() {
        assert_eq!(safe_recompose_color("unknown", &[1.0, 2.0, 3.0], None, None), None);
        assert_eq!(
            safe_recompose_color("rgb", &[1.0, 2.0, 3.0], None, None).as_deref(),
            Some("rgb(1, 2, 3)")
        );
    }
}
