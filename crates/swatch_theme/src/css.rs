//! Loosely typed CSS scalar values

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use swatch_color::format_number;

/// A CSS value that is either a bare number or a string with units.
///
/// Numbers render without a unit (`1.5`), text renders as written (`0.5rem`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Number(f64),
    Text(String),
}

impl CssValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl Display for CssValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for CssValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
