//! Swatch Theme
//!
//! Builds complete design-system themes from partial configuration.
//!
//! # Overview
//!
//! A [`Theme`] is composed of independent sections, each with its own builder:
//!
//! - **Palette** ([`create_palette`]): six color roles expanded into
//!   `main`/`light`/`dark`/`contrastText`, mode tokens, custom colors
//! - **Typography** ([`create_typography`]): 13 text variants scaled in rem
//! - **Spacing** ([`create_spacing`]) and **Breakpoints** ([`create_breakpoints`])
//! - **Transitions**, **Shadows**, **ZIndex**, **Shape** and **Mixins**
//! - **Components**: per-component default props, style overrides and variants
//!
//! [`create_theme`] runs every builder and deep-merges caller overrides on
//! top. Themes are plain data and serialize to JSON with camelCase keys.
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_theme::{create_theme, PaletteMode, ThemeOptions};
//!
//! let options = ThemeOptions::from_toml_str(
//!     r##"
//!     [palette]
//!     mode = "dark"
//!     primary = { main = "#3f51b5" }
//!     "##,
//! )
//! .unwrap();
//!
//! let theme = create_theme(&options, &[]).unwrap();
//! assert_eq!(theme.palette.mode, PaletteMode::Dark);
//! assert_eq!(theme.palette.primary.contrast_text, "#fff");
//! assert_eq!(theme.spacing.of(2.0), "16px");
//! assert_eq!(theme.breakpoints.up("md").unwrap(), "@media (min-width:900px)");
//! ```
//!
//! # Styled components
//!
//! The [`styled`] module resolves which theme overrides and variants apply to
//! a component slot.

pub mod breakpoints;
pub mod colors;
pub mod components;
pub mod config;
pub mod css;
pub mod error;
pub mod mixins;
pub mod palette;
pub mod shadows;
pub mod shape;
pub mod spacing;
pub mod styled;
pub mod theme;
pub mod transitions;
pub mod typography;
pub mod z_index;

// Re-export commonly used types
pub use breakpoints::{create_breakpoints, Breakpoints, BreakpointsOptions};
pub use colors::MaterialColor;
pub use components::{ComponentConfig, ComponentVariant, Components};
pub use config::ConfigFormat;
pub use css::CssValue;
pub use error::{BreakpointError, PaletteError, Result, ThemeError};
pub use mixins::{create_mixins, Mixins};
pub use palette::{
    augment_color, create_palette, get_contrast_text, safe_augment_color, AugmentColorOptions,
    ColorRole, Palette, PaletteColor, PaletteColorOptions, PaletteMode, PaletteOptions,
    TonalOffset,
};
pub use shadows::{create_shadows, default_shadows};
pub use shape::{create_shape, Shape, ShapeOptions};
pub use spacing::{create_spacing, Spacing, SpacingOptions};
pub use styled::{create_styled, Styled, StyledOptions};
pub use theme::{create_theme, Direction, Theme, ThemeOptions};
pub use transitions::{create_transitions, TransitionOptions, Transitions, TransitionsOptions};
pub use typography::{
    create_typography, PxToRem, Typography, TypographyInput, TypographyOptions, TypographyStyle,
    Variant,
};
pub use z_index::{create_z_index, ZIndex, ZIndexOptions};
