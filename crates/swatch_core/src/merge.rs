//! Deep merge and path lookup over style trees
//!
//! Style trees are `serde_json` values. Only objects are merged key by key;
//! arrays, strings, numbers, booleans and null are leaves and are replaced
//! wholesale by the source value.

pub use serde_json::{Map, Value};

/// Key that is never copied from a source tree.
const PROTO_KEY: &str = "__proto__";

/// Returns true if the value is a plain key/value object.
///
/// Arrays are not plain objects, so they are never merged element-wise.
pub fn is_plain_object(value: &Value) -> bool {
    value.is_object()
}

/// Merge `source` over `target`, returning a new tree.
///
/// This is the cloning mode: the result owns every branch, so later changes
/// to the result never reach either input. Nested objects present on both
/// sides are merged recursively; any other source value replaces the target
/// value. If either side is not an object, the target is returned unchanged.
pub fn deep_merge(target: &Value, source: &Value) -> Value {
    let (Value::Object(target_map), Value::Object(source_map)) = (target, source) else {
        return target.clone();
    };

    let mut output = target_map.clone();
    for (key, source_value) in source_map {
        if key == PROTO_KEY {
            tracing::debug!("deep_merge: skipping `{}` key", PROTO_KEY);
            continue;
        }

        let merged = match target_map.get(key) {
            Some(target_value) if target_value.is_object() && source_value.is_object() => {
                deep_merge(target_value, source_value)
            }
            _ => source_value.clone(),
        };
        output.insert(key.clone(), merged);
    }

    Value::Object(output)
}

/// Merge `source` into `target` without cloning.
///
/// Branches of `source` that do not exist in `target` are moved in as they
/// are. Use this when the source tree is not needed afterwards.
pub fn deep_merge_in_place(target: &mut Value, source: Value) {
    let (Value::Object(target_map), Value::Object(source_map)) = (target, source) else {
        return;
    };

    for (key, source_value) in source_map {
        if key == PROTO_KEY {
            tracing::debug!("deep_merge_in_place: skipping `{}` key", PROTO_KEY);
            continue;
        }

        match target_map.get_mut(&key) {
            Some(target_value) if target_value.is_object() && source_value.is_object() => {
                deep_merge_in_place(target_value, source_value);
            }
            _ => {
                target_map.insert(key, source_value);
            }
        }
    }
}

/// Look up a dot-separated path (`"palette.primary.main"`, `"shadows.3"`).
///
/// Numeric segments index into arrays. Missing segments and `null` values
/// resolve to `None`.
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
        if current.is_null() {
            return None;
        }
    }

    Some(current)
}

/// Like [`get_path`], but a top-level `vars` object is searched first. Theme
/// trees that carry CSS variable references resolve to those before their
/// literal values.
pub fn get_path_with_vars<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    value
        .get("vars")
        .filter(|vars| vars.is_object())
        .and_then(|vars| get_path(vars, path))
        .or_else(|| get_path(value, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn merges_nested_objects() {
        let target = json!({ "a": { "x": 1 } });
        let source = json!({ "a": { "y": 2 }, "b": 3 });

        let merged = deep_merge(&target, &source);
        assert_eq!(merged, json!({ "a": { "x": 1, "y": 2 }, "b": 3 }));

        // Inputs are untouched
        assert_eq!(target, json!({ "a": { "x": 1 } }));
        assert_eq!(source, json!({ "a": { "y": 2 }, "b": 3 }));
    }

    #[test]
    fn skips_proto_key() {
        let source: Value =
            serde_json::from_str(r#"{"myProperty": "a", "__proto__": {"isAdmin": true}}"#)
                .unwrap();

        let merged = deep_merge(&json!({}), &source);
        assert_eq!(merged, json!({ "myProperty": "a" }));

        let mut in_place = json!({});
        deep_merge_in_place(&mut in_place, source);
        assert_eq!(in_place, json!({ "myProperty": "a" }));
    }

    #[test]
    fn source_overrides_leaf_values() {
        let merged = deep_merge(
            &json!({ "&.Swatch-disabled": { "color": "red" } }),
            &json!({ "&.Swatch-disabled": { "color": "green" } }),
        );
        assert_eq!(merged, json!({ "&.Swatch-disabled": { "color": "green" } }));
    }

    #[test]
    fn null_target_is_reset_by_source_object() {
        let merged = deep_merge(
            &json!({ "&.Swatch-disabled": null }),
            &json!({ "&.Swatch-disabled": { "color": "red" } }),
        );
        assert_eq!(merged, json!({ "&.Swatch-disabled": { "color": "red" } }));
    }

    #[test]
    fn arrays_are_replaced_not_merged() {
        let merged = deep_merge(&json!({ "list": [1, 2, 3] }), &json!({ "list": [9] }));
        assert_eq!(merged, json!({ "list": [9] }));
    }

    #[test]
    fn non_object_target_is_kept() {
        assert_eq!(deep_merge(&json!(5), &json!({ "a": 1 })), json!(5));
        assert_eq!(deep_merge(&json!({ "a": 1 }), &json!("x")), json!({ "a": 1 }));
    }

    #[test]
    fn in_place_merge_moves_new_branches() {
        let mut target = json!({ "foo": { "baz": "target" } });
        deep_merge_in_place(
            &mut target,
            json!({ "foo": { "bar": "source" }, "bar": "source-bar" }),
        );
        assert_eq!(
            target,
            json!({ "foo": { "baz": "target", "bar": "source" }, "bar": "source-bar" })
        );
    }

    #[test]
    fn path_lookup() {
        let tree = json!({
            "spacing": 8,
            "palette": { "primary": { "main": "#1976d2" } },
            "shadows": ["none", "0px 1px"],
            "empty": null,
        });

        assert_eq!(get_path(&tree, "spacing"), Some(&json!(8)));
        assert_eq!(get_path(&tree, "palette.primary.main"), Some(&json!("#1976d2")));
        assert_eq!(get_path(&tree, "shadows.1"), Some(&json!("0px 1px")));
        assert_eq!(get_path(&tree, "palette.secondary.main"), None);
        assert_eq!(get_path(&tree, "empty"), None);
        assert_eq!(get_path(&tree, ""), None);
    }

    #[test]
    fn path_lookup_prefers_vars() {
        let tree = json!({
            "vars": { "palette": { "primary": { "main": "var(--palette-primary-main)" } } },
            "palette": { "primary": { "main": "#1976d2", "dark": "#1565c0" } },
        });

        assert_eq!(
            get_path_with_vars(&tree, "palette.primary.main"),
            Some(&json!("var(--palette-primary-main)"))
        );
        assert_eq!(
            get_path_with_vars(&tree, "palette.primary.dark"),
            Some(&json!("#1565c0"))
        );
        assert_eq!(
            get_path(&tree, "palette.primary.main"),
            Some(&json!("#1976d2"))
        );
        assert_eq!(
            get_path_with_vars(&json!({ "vars": 3, "a": 1 }), "a"),
            Some(&json!(1))
        );
    }
}
