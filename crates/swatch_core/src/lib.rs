//! Swatch Core
//!
//! Shared building blocks for the Swatch design system crates:
//!
//! - **Deep merge**: recursive merging of JSON-like style trees, the primitive
//!   every theme builder uses to layer caller overrides over defaults
//! - **Path lookup**: dot-path access into merged trees (`palette.primary.main`)
//! - **Class names**: a process-wide class name generator and utility class
//!   generation for component slots
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use swatch_core::deep_merge;
//!
//! let merged = deep_merge(&json!({ "a": { "x": 1 } }), &json!({ "a": { "y": 2 }, "b": 3 }));
//! assert_eq!(merged, json!({ "a": { "x": 1, "y": 2 }, "b": 3 }));
//! ```

pub mod class_name;
pub mod merge;

pub use class_name::{
    capitalize, generate_utility_class, is_state_class, ClassNameGenerator, STATE_CLASSES,
    STATE_CLASS_PREFIX,
};
pub use merge::{deep_merge, deep_merge_in_place, get_path, get_path_with_vars, is_plain_object, Map, Value};
