//! Spacing scale

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::css::CssValue;

pub const DEFAULT_SPACING: f64 = 8.0;

type Transform = Arc<dyn Fn(f64) -> CssValue + Send + Sync>;

/// How spacing arguments map to CSS lengths.
#[derive(Clone)]
pub enum SpacingOptions {
    /// `value * factor` pixels
    Factor(f64),
    /// `scale[value]`, value must be an integer index
    Scale(Vec<CssValue>),
    Custom(Transform),
}

impl SpacingOptions {
    pub fn custom<F>(transform: F) -> Self
    where
        F: Fn(f64) -> CssValue + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(transform))
    }
}

impl Default for SpacingOptions {
    fn default() -> Self {
        Self::Factor(DEFAULT_SPACING)
    }
}

impl Debug for SpacingOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Factor(factor) => f.debug_tuple("Factor").field(factor).finish(),
            Self::Scale(scale) => f.debug_tuple("Scale").field(scale).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSpacing {
    Factor(f64),
    Scale(Vec<CssValue>),
}

// Config files can express a factor or a scale; functions are code-only.
impl<'de> Deserialize<'de> for SpacingOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawSpacing::deserialize(deserializer)? {
            RawSpacing::Factor(factor) => Self::Factor(factor),
            RawSpacing::Scale(scale) => Self::Scale(scale),
        })
    }
}

/// A spacing argument: numbers go through the transform, strings pass through.
pub type SpacingArg = CssValue;

/// Spacing helper produced by [`create_spacing`].
///
/// ```rust
/// use swatch_theme::spacing::{create_spacing, SpacingOptions};
///
/// let spacing = create_spacing(SpacingOptions::default());
/// assert_eq!(spacing.of(2.0), "16px");
/// assert_eq!(spacing.call(&[1.0.into(), "auto".into()]), "8px auto");
/// ```
#[derive(Clone)]
pub struct Spacing {
    options: SpacingOptions,
}

impl Spacing {
    /// Map one numeric argument through the transform.
    fn transform(&self, value: f64) -> Option<CssValue> {
        match &self.options {
            SpacingOptions::Factor(factor) => Some(CssValue::Number(factor * value)),
            SpacingOptions::Scale(scale) => {
                if value.fract() != 0.0 {
                    if cfg!(debug_assertions) {
                        warn!(
                            "`theme.spacing` array type cannot be combined with non integer values. \
                             You should either use an integer value that can be used as index, \
                             or define the `theme.spacing` as a number"
                        );
                    }
                    return None;
                }
                if value < 0.0 {
                    if cfg!(debug_assertions) {
                        warn!(
                            "The value provided ({value}) is negative. `theme.spacing` array \
                             indexes start at 0"
                        );
                    }
                    return None;
                }
                let found = scale.get(value as usize).cloned();
                if found.is_none() && cfg!(debug_assertions) {
                    warn!(
                        "The value provided ({value}) overflows. Supported values are: {scale:?}. \
                         {value} > {}, you need to add the missing values",
                        scale.len().saturating_sub(1)
                    );
                }
                found
            }
            SpacingOptions::Custom(transform) => Some(transform(value)),
        }
    }

    fn render(&self, arg: &SpacingArg) -> String {
        match arg {
            CssValue::Text(text) => text.clone(),
            CssValue::Number(value) => match self.transform(*value) {
                Some(CssValue::Number(px)) => format!("{}px", CssValue::Number(px)),
                Some(CssValue::Text(text)) => text,
                None => String::new(),
            },
        }
    }

    /// Render up to four arguments joined by spaces. No arguments means `1`.
    pub fn call(&self, args: &[SpacingArg]) -> String {
        if args.len() > 4 && cfg!(debug_assertions) {
            warn!(
                "Too many arguments provided, expected between 0 and 4, got {}",
                args.len()
            );
        }

        if args.is_empty() {
            return self.render(&CssValue::Number(1.0));
        }
        args.iter()
            .map(|arg| self.render(arg))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Shorthand for a single numeric argument.
    pub fn of(&self, value: f64) -> String {
        self.render(&CssValue::Number(value))
    }

    pub fn options(&self) -> &SpacingOptions {
        &self.options
    }
}

impl Default for Spacing {
    fn default() -> Self {
        create_spacing(SpacingOptions::default())
    }
}

impl Debug for Spacing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spacing")
            .field("options", &self.options)
            .finish()
    }
}

pub fn create_spacing(options: SpacingOptions) -> Spacing {
    Spacing { options }
}
