//! Corner radii

use serde::{Deserialize, Serialize};

pub const DEFAULT_BORDER_RADIUS: f64 = 4.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub border_radius: f64,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            border_radius: DEFAULT_BORDER_RADIUS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeOptions {
    pub border_radius: Option<f64>,
}

pub fn create_shape(options: &ShapeOptions) -> Shape {
    Shape {
        border_radius: options.border_radius.unwrap_or(DEFAULT_BORDER_RADIUS),
    }
}
