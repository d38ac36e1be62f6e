//! Class name generation
//!
//! Component slots get utility class names such as `SwatchButton-root`. The
//! component part goes through a [`ClassNameGenerator`], which applications can
//! reconfigure once at startup (for example to add a project prefix). Global
//! state slots (`disabled`, `focused`, ...) always use the shared state prefix
//! so they can be targeted across components.

use std::sync::{Arc, OnceLock, RwLock};

use tracing::debug;

/// Global generator instance.
static CLASS_NAME_GENERATOR: OnceLock<ClassNameGenerator> = OnceLock::new();

/// Prefix used for global state classes.
pub const STATE_CLASS_PREFIX: &str = "Swatch";

/// Slots that describe a component state rather than a component part.
pub const STATE_CLASSES: [&str; 10] = [
    "active",
    "checked",
    "completed",
    "disabled",
    "error",
    "expanded",
    "focused",
    "focusVisible",
    "required",
    "selected",
];

type GenerateFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Configurable component-name to class-name mapping.
///
/// The default mapping is the identity. A configured mapping stays in effect
/// for every following [`generate`](Self::generate) call until
/// [`reset`](Self::reset).
pub struct ClassNameGenerator {
    generate: RwLock<Option<GenerateFn>>,
}

impl ClassNameGenerator {
    /// Create a generator with the identity mapping.
    pub fn new() -> Self {
        Self {
            generate: RwLock::new(None),
        }
    }

    /// Process-wide generator shared by all consumers that are not handed
    /// their own instance.
    pub fn global() -> &'static ClassNameGenerator {
        CLASS_NAME_GENERATOR.get_or_init(ClassNameGenerator::new)
    }

    /// Replace the mapping used by [`generate`](Self::generate).
    pub fn configure<F>(&self, generate: F)
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        debug!("ClassNameGenerator::configure - installing custom generator");
        let mut slot = self.generate.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Arc::new(generate));
    }

    /// Restore the identity mapping.
    pub fn reset(&self) {
        let mut slot = self.generate.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    /// Map a component name to its class name.
    pub fn generate(&self, component_name: &str) -> String {
        let slot = self.generate.read().unwrap_or_else(|e| e.into_inner());
        match slot.as_ref() {
            Some(generate) => generate(component_name),
            None => component_name.to_string(),
        }
    }
}

impl Default for ClassNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClassNameGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let configured = self
            .generate
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false);
        f.debug_struct("ClassNameGenerator")
            .field("configured", &configured)
            .finish()
    }
}

/// Returns true if `slot` is one of the global [`STATE_CLASSES`].
pub fn is_state_class(slot: &str) -> bool {
    STATE_CLASSES.contains(&slot)
}

/// Build the utility class for a component slot.
///
/// State slots become `{state_prefix}-{slot}`; every other slot becomes
/// `{generator(component_name)}-{slot}`. `state_prefix` defaults to
/// [`STATE_CLASS_PREFIX`].
pub fn generate_utility_class(
    generator: &ClassNameGenerator,
    component_name: &str,
    slot: &str,
    state_prefix: Option<&str>,
) -> String {
    if is_state_class(slot) {
        format!("{}-{}", state_prefix.unwrap_or(STATE_CLASS_PREFIX), slot)
    } else {
        format!("{}-{}", generator.generate(component_name), slot)
    }
}

/// Upper-case the first character. Not equivalent to CSS `text-transform: capitalize`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_slot_class() {
        let generator = ClassNameGenerator::new();
        assert_eq!(
            generate_utility_class(&generator, "Foo", "slot", None),
            "Foo-slot"
        );
    }

    #[test]
    fn generates_state_classes() {
        let generator = ClassNameGenerator::new();
        for state in STATE_CLASSES {
            assert_eq!(
                generate_utility_class(&generator, "Foo", state, None),
                format!("Swatch-{state}")
            );
        }
    }

    #[test]
    fn custom_generator_applies_until_reset() {
        let generator = ClassNameGenerator::new();
        generator.configure(|name| format!("foo-bar-{name}"));

        assert_eq!(
            generate_utility_class(&generator, "Foo", "slot", None),
            "foo-bar-Foo-slot"
        );
        // State classes ignore the custom generator
        assert_eq!(
            generate_utility_class(&generator, "Foo", "disabled", None),
            "Swatch-disabled"
        );

        generator.reset();
        assert_eq!(
            generate_utility_class(&generator, "Foo", "slot", None),
            "Foo-slot"
        );
    }

    #[test]
    fn custom_state_prefix() {
        let generator = ClassNameGenerator::new();
        assert_eq!(
            generate_utility_class(&generator, "JoyButton", "focusVisible", Some("Joy")),
            "Joy-focusVisible"
        );
    }

    #[test]
    fn capitalizes_first_letter() {
        assert_eq!(capitalize("primary"), "Primary");
        assert_eq!(capitalize("focusVisible"), "FocusVisible");
        assert_eq!(capitalize(""), "");
    }
}
