//! Styled component resolution
//!
//! The data side of a styled component: which props reach the underlying
//! element, how the component is labelled, and which theme styles apply to
//! it. A component registered under `name` picks up
//! `theme.components[name].styleOverrides` and the variants whose props match
//! its own.
//!
//! ```rust
//! use serde_json::json;
//! use swatch_theme::styled::{create_styled, StyledOptions};
//! use swatch_theme::{create_theme, ThemeOptions};
//!
//! let theme = create_theme(
//!     &ThemeOptions::default(),
//!     &[json!({
//!         "components": {
//!             "SwatchButton": {
//!                 "variants": [{ "props": { "variant": "dashed" }, "style": { "border": "1px dashed" } }]
//!             }
//!         }
//!     })],
//! )
//! .unwrap();
//!
//! let root = create_styled("ButtonBase", StyledOptions::new("SwatchButton").slot("Root"));
//! let props = json!({ "variant": "dashed" });
//! let layers = root.resolve_variants(&theme, props.as_object().unwrap());
//! assert_eq!(layers, vec![json!({ "border": "1px dashed" })]);
//! ```

use indexmap::IndexMap;
use serde_json::{Map, Value};
use swatch_core::{capitalize, deep_merge_in_place};

use crate::theme::Theme;

/// Props consumed by the styling layer and never forwarded.
const INTERNAL_PROPS: [&str; 3] = ["ownerState", "theme", "as"];

pub fn should_forward_prop(prop: &str) -> bool {
    !INTERNAL_PROPS.contains(&prop)
}

/// Root slots also consume `classes`.
pub fn root_should_forward_prop(prop: &str) -> bool {
    should_forward_prop(prop) && prop != "classes"
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Class key for a set of variant props: `variant` first, then the
/// remaining string props sorted by name. Non-string props are ignored.
///
/// `{ variant: "outlined", size: "large", color: "primary" }` becomes
/// `outlinedPrimarySizeLarge`.
pub fn props_to_class_key(props: &Map<String, Value>) -> String {
    let mut class_key = props
        .get("variant")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut keys: Vec<&String> = props.keys().filter(|key| *key != "variant").collect();
    keys.sort();

    for key in keys {
        let Some(value) = props[key.as_str()].as_str() else {
            continue;
        };
        let value = strip_whitespace(value);
        if key == "color" {
            if class_key.is_empty() {
                class_key.push_str(&value);
            } else {
                class_key.push_str(&capitalize(&value));
            }
        } else {
            if class_key.is_empty() {
                class_key.push_str(key);
            } else {
                class_key.push_str(&capitalize(key));
            }
            class_key.push_str(&capitalize(&value));
        }
    }
    class_key
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase tags (`div`, `span`) are plain elements.
fn is_html_tag(tag: &str) -> bool {
    tag.chars().next().is_some_and(|c| c.is_ascii_lowercase())
}

/// Which props a styled component passes to its underlying element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropFilter {
    /// [`root_should_forward_prop`]
    Root,
    /// [`should_forward_prop`]
    Slot,
    /// Plain elements receive everything.
    None,
    /// [`should_forward_prop`] for unnamed wrappers.
    Default,
}

impl PropFilter {
    pub fn should_forward(self, prop: &str) -> bool {
        match self {
            Self::Root => root_should_forward_prop(prop),
            Self::Slot | Self::Default => should_forward_prop(prop),
            Self::None => true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledOptions {
    /// Theme component key, `SwatchButton`.
    pub name: Option<String>,
    /// Slot within the component, `Root` or `Label`.
    pub slot: Option<String>,
    /// Defaults to true for every slot except `Root`.
    pub skip_variants_resolver: Option<bool>,
}

impl StyledOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    pub fn skip_variants_resolver(mut self, skip: bool) -> Self {
        self.skip_variants_resolver = Some(skip);
        self
    }
}

/// A resolved styled component description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Styled {
    name: Option<String>,
    label: Option<String>,
    display_name: String,
    skip_variants_resolver: bool,
    prop_filter: PropFilter,
}

/// Builds style layers from theme overrides given props and the slot's overrides.
pub type OverridesResolver<'a> = &'a dyn Fn(&Map<String, Value>, &Map<String, Value>) -> Option<Value>;

pub fn create_styled(tag: &str, options: StyledOptions) -> Styled {
    let StyledOptions {
        name,
        slot,
        skip_variants_resolver,
    } = options;
    let slot = slot.filter(|slot| !slot.is_empty());

    let label = name.as_ref().map(|name| {
        format!(
            "{name}-{}",
            lowercase_first(slot.as_deref().unwrap_or("Root"))
        )
    });
    let display_name = match &name {
        Some(name) => format!("{name}{}", slot.as_deref().unwrap_or("")),
        None => format!("Styled({tag})"),
    };
    let skip_variants_resolver = skip_variants_resolver
        .unwrap_or_else(|| slot.as_deref().is_some_and(|slot| slot != "Root"));
    let prop_filter = match slot.as_deref() {
        Some("Root") => PropFilter::Root,
        Some(_) => PropFilter::Slot,
        None if is_html_tag(tag) => PropFilter::None,
        None => PropFilter::Default,
    };

    Styled {
        name,
        label,
        display_name,
        skip_variants_resolver,
        prop_filter,
    }
}

impl Styled {
    /// `{name}-{slot}` with the slot lowercased, `None` for unnamed components.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn prop_filter(&self) -> PropFilter {
        self.prop_filter
    }

    pub fn should_forward_prop(&self, prop: &str) -> bool {
        self.prop_filter.should_forward(prop)
    }

    /// The subset of `props` passed to the underlying element.
    pub fn forwarded_props(&self, props: &Map<String, Value>) -> Map<String, Value> {
        props
            .iter()
            .filter(|(key, _)| self.should_forward_prop(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// `theme.components[name].styleOverrides`, if any.
    pub fn style_overrides<'t>(&self, theme: &'t Theme) -> Option<&'t Map<String, Value>> {
        let config = theme.components.get(self.name.as_deref()?)?;
        (!config.style_overrides.is_empty()).then_some(&config.style_overrides)
    }

    /// Theme variant styles keyed by [`props_to_class_key`]. Later variants
    /// with the same key win.
    pub fn variant_styles(&self, theme: &Theme) -> IndexMap<String, Value> {
        let Some(config) = self.name.as_deref().and_then(|name| theme.components.get(name)) else {
            return IndexMap::new();
        };
        config
            .variants
            .iter()
            .map(|variant| (props_to_class_key(&variant.props), variant.style.clone()))
            .collect()
    }

    /// Styles of the theme variants matching `props`. A variant matches when
    /// every one of its props equals the component's `ownerState` value or
    /// prop value for that key.
    pub fn resolve_variants(&self, theme: &Theme, props: &Map<String, Value>) -> Vec<Value> {
        let Some(config) = self.name.as_deref().and_then(|name| theme.components.get(name)) else {
            return Vec::new();
        };
        let styles = self.variant_styles(theme);
        let owner_state = props.get("ownerState").and_then(Value::as_object);

        config
            .variants
            .iter()
            .filter(|variant| {
                variant.props.iter().all(|(key, expected)| {
                    owner_state.and_then(|state| state.get(key)) == Some(expected)
                        || props.get(key) == Some(expected)
                })
            })
            .filter_map(|variant| styles.get(&props_to_class_key(&variant.props)).cloned())
            .collect()
    }

    /// Ordered style layers for a render: `base`, then the slot's theme
    /// overrides through `overrides_resolver`, then matching variants.
    pub fn resolve(
        &self,
        theme: &Theme,
        base: Value,
        props: &Map<String, Value>,
        overrides_resolver: Option<OverridesResolver<'_>>,
    ) -> Vec<Value> {
        let mut layers = vec![base];
        if self.name.is_none() {
            return layers;
        }

        if let (Some(resolver), Some(overrides)) = (overrides_resolver, self.style_overrides(theme)) {
            layers.extend(resolver(props, overrides));
        }
        if !self.skip_variants_resolver {
            layers.extend(self.resolve_variants(theme, props));
        }
        layers
    }
}

/// Flatten style layers into one object, later layers winning.
pub fn merge_layers(layers: Vec<Value>) -> Value {
    layers
        .into_iter()
        .fold(Value::Object(Map::new()), |mut merged, layer| {
            deep_merge_in_place(&mut merged, layer);
            merged
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{create_theme, ThemeOptions};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    fn button_theme() -> Theme {
        create_theme(
            &ThemeOptions::default(),
            &[json!({
                "components": {
                    "SwatchButton": {
                        "styleOverrides": {
                            "root": { "textTransform": "none" },
                            "label": { "fontWeight": 700 }
                        },
                        "variants": [
                            { "props": { "variant": "dashed" }, "style": { "border": "1px dashed" } },
                            {
                                "props": { "variant": "dashed", "color": "secondary" },
                                "style": { "borderColor": "pink" }
                            },
                            { "props": { "size": "huge" }, "style": { "fontSize": 40 } }
                        ]
                    }
                }
            })],
        )
        .unwrap()
    }

    #[test]
    fn forwarding() {
        assert!(should_forward_prop("onClick"));
        assert!(!should_forward_prop("ownerState"));
        assert!(!should_forward_prop("as"));
        assert!(should_forward_prop("classes"));
        assert!(!root_should_forward_prop("classes"));
    }

    #[test]
    fn class_keys() {
        let key = |value: Value| props_to_class_key(&object(value));
        assert_eq!(key(json!({ "variant": "outlined" })), "outlined");
        assert_eq!(
            key(json!({ "variant": "outlined", "size": "large", "color": "primary" })),
            "outlinedPrimarySizeLarge"
        );
        assert_eq!(key(json!({ "size": "large" })), "sizeLarge");
        assert_eq!(key(json!({ "size": "x large", "dense": true })), "sizeXlarge");
        assert_eq!(key(json!({ "color": "secondary", "size": "small" })), "secondarySizeSmall");
        assert_eq!(key(json!({})), "");
    }

    #[test]
    fn labels_and_names() {
        let root = create_styled("button", StyledOptions::new("SwatchButton").slot("Root"));
        assert_eq!(root.label(), Some("SwatchButton-root"));
        assert_eq!(root.display_name(), "SwatchButtonRoot");
        assert_eq!(root.prop_filter(), PropFilter::Root);

        let label = create_styled("span", StyledOptions::new("SwatchButton").slot("StartIcon"));
        assert_eq!(label.label(), Some("SwatchButton-startIcon"));
        assert_eq!(label.prop_filter(), PropFilter::Slot);

        let unnamed = create_styled("div", StyledOptions::default());
        assert_eq!(unnamed.label(), None);
        assert_eq!(unnamed.display_name(), "Styled(div)");
        assert_eq!(unnamed.prop_filter(), PropFilter::None);
        assert!(unnamed.should_forward_prop("ownerState"));

        let wrapper = create_styled("Paper", StyledOptions::default());
        assert_eq!(wrapper.prop_filter(), PropFilter::Default);
    }

    #[test]
    fn forwarded_props_for_root() {
        let root = create_styled("button", StyledOptions::new("SwatchButton").slot("Root"));
        let props = object(json!({ "classes": {}, "ownerState": {}, "disabled": true }));
        assert_eq!(root.forwarded_props(&props), object(json!({ "disabled": true })));
    }

    #[test]
    fn variants_match_props_and_owner_state() {
        let theme = button_theme();
        let root = create_styled("button", StyledOptions::new("SwatchButton").slot("Root"));

        let styles = root.variant_styles(&theme);
        assert_eq!(
            styles.keys().collect::<Vec<_>>(),
            vec!["dashed", "dashedSecondary", "sizeHuge"]
        );

        let props = object(json!({ "variant": "dashed", "ownerState": { "color": "secondary" } }));
        assert_eq!(
            root.resolve_variants(&theme, &props),
            vec![json!({ "border": "1px dashed" }), json!({ "borderColor": "pink" })]
        );
        assert!(root
            .resolve_variants(&theme, &object(json!({ "variant": "text" })))
            .is_empty());
    }

    #[test]
    fn resolve_orders_layers() {
        let theme = button_theme();
        let root = create_styled("button", StyledOptions::new("SwatchButton").slot("Root"));
        let props = object(json!({ "size": "huge" }));
        let slot_overrides = |_: &Map<String, Value>, overrides: &Map<String, Value>| {
            overrides.get("root").cloned()
        };

        let layers = root.resolve(
            &theme,
            json!({ "padding": 8, "fontSize": 14 }),
            &props,
            Some(&slot_overrides),
        );
        assert_eq!(
            layers,
            vec![
                json!({ "padding": 8, "fontSize": 14 }),
                json!({ "textTransform": "none" }),
                json!({ "fontSize": 40 }),
            ]
        );
        assert_eq!(
            merge_layers(layers),
            json!({ "padding": 8, "fontSize": 40, "textTransform": "none" })
        );
    }

    #[test]
    fn non_root_slots_skip_variants() {
        let theme = button_theme();
        let label = create_styled("span", StyledOptions::new("SwatchButton").slot("Label"));
        let props = object(json!({ "size": "huge" }));
        assert_eq!(label.resolve(&theme, json!({}), &props, None), vec![json!({})]);

        let forced = create_styled(
            "span",
            StyledOptions::new("SwatchButton")
                .slot("Label")
                .skip_variants_resolver(false),
        );
        assert_eq!(forced.resolve(&theme, json!({}), &props, None).len(), 2);
    }
}
