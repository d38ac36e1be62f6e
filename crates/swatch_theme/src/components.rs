//! Per-component theme customization

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A style applied when a component's props match `props`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentVariant {
    pub props: Map<String, Value>,
    pub style: Value,
}

/// Theme entry for one component, keyed by component name (`SwatchButton`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentConfig {
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub default_props: Map<String, Value>,
    /// Slot name to style.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub style_overrides: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ComponentVariant>,
}

pub type Components = IndexMap<String, ComponentConfig>;
