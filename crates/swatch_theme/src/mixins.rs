//! Reusable style fragments

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::breakpoints::Breakpoints;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mixins {
    /// App bar height: 56px, 48px in landscape on phones, 64px from `sm` up.
    pub toolbar: Value,
    /// Caller defined mixins.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Build the toolbar mixin and apply caller mixins on top. Caller keys
/// replace built-in ones entirely.
pub fn create_mixins(breakpoints: &Breakpoints, options: &Map<String, Value>) -> Mixins {
    let mut toolbar = Map::new();
    toolbar.insert("minHeight".into(), json!(56));
    if let Ok(query) = breakpoints.up("xs") {
        toolbar.insert(
            query,
            json!({ "@media (orientation: landscape)": { "minHeight": 48 } }),
        );
    }
    if let Ok(query) = breakpoints.up("sm") {
        toolbar.insert(query, json!({ "minHeight": 64 }));
    }

    let mut extra = options.clone();
    let toolbar = extra.remove("toolbar").unwrap_or(Value::Object(toolbar));

    Mixins { toolbar, extra }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoints::{create_breakpoints, BreakpointsOptions};
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn toolbar_uses_breakpoints() {
        let mixins = create_mixins(&Breakpoints::default(), &Map::new());
        assert_eq!(
            mixins.toolbar,
            json!({
                "minHeight": 56,
                "@media (min-width:0px)": {
                    "@media (orientation: landscape)": { "minHeight": 48 }
                },
                "@media (min-width:600px)": { "minHeight": 64 }
            })
        );
    }

    #[test]
    fn missing_breakpoints_are_skipped() {
        let breakpoints = create_breakpoints(&BreakpointsOptions {
            values: Some(IndexMap::from([("mobile".to_string(), 0.0)])),
            ..Default::default()
        })
        .unwrap();
        let mixins = create_mixins(&breakpoints, &Map::new());
        assert_eq!(mixins.toolbar, json!({ "minHeight": 56 }));
    }

    #[test]
    fn caller_mixins_replace_and_extend() {
        let options = json!({ "toolbar": { "minHeight": 40 }, "gutters": { "padding": 16 } });
        let Value::Object(options) = options else {
            unreachable!()
        };
        let mixins = create_mixins(&Breakpoints::default(), &options);
        assert_eq!(mixins.toolbar, json!({ "minHeight": 40 }));
        assert_eq!(mixins.extra["gutters"], json!({ "padding": 16 }));
    }
}
