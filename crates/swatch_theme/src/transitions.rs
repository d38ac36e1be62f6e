//! Motion: easing curves, durations and `transition` shorthand builder

use serde::{Deserialize, Serialize};

use crate::css::CssValue;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Easing {
    /// Objects moving between two on-screen positions.
    pub standard: String,
    /// Objects entering the screen.
    pub decelerated: String,
    /// Objects leaving the screen.
    pub accelerated: String,
    /// Objects that may return to the screen at any time.
    pub sharp: String,
}

impl Default for Easing {
    fn default() -> Self {
        Self {
            standard: "cubic-bezier(0.4, 0, 0.2, 1)".into(),
            decelerated: "cubic-bezier(0, 0, 0.2, 1)".into(),
            accelerated: "cubic-bezier(0.4, 0, 1, 1)".into(),
            sharp: "cubic-bezier(0.4, 0, 0.6, 1)".into(),
        }
    }
}

/// Durations in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Duration {
    pub shortest: f64,
    pub shorter: f64,
    pub short: f64,
    pub standard: f64,
    pub complex: f64,
    pub entering_screen: f64,
    pub leaving_screen: f64,
}

impl Default for Duration {
    fn default() -> Self {
        Self {
            shortest: 150.0,
            shorter: 200.0,
            short: 250.0,
            standard: 300.0,
            complex: 375.0,
            entering_screen: 225.0,
            leaving_screen: 195.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EasingOptions {
    pub standard: Option<String>,
    pub decelerated: Option<String>,
    pub accelerated: Option<String>,
    pub sharp: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DurationOptions {
    pub shortest: Option<f64>,
    pub shorter: Option<f64>,
    pub short: Option<f64>,
    pub standard: Option<f64>,
    pub complex: Option<f64>,
    pub entering_screen: Option<f64>,
    pub leaving_screen: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransitionsOptions {
    pub easing: EasingOptions,
    pub duration: DurationOptions,
}

/// Per-call options for [`Transitions::create`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionOptions {
    /// Milliseconds or a CSS time. Defaults to `duration.standard`.
    pub duration: Option<CssValue>,
    /// Defaults to `easing.standard`.
    pub easing: Option<String>,
    pub delay: Option<CssValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transitions {
    pub easing: Easing,
    pub duration: Duration,
}

fn format_ms(milliseconds: f64) -> String {
    format!("{}ms", swatch_color::round_half_up(milliseconds))
}

fn format_time(value: &CssValue) -> String {
    match value {
        CssValue::Number(ms) => format_ms(*ms),
        CssValue::Text(text) => match text.trim().parse::<f64>() {
            Ok(ms) => format_ms(ms),
            Err(_) => text.clone(),
        },
    }
}

impl Transitions {
    /// `transition` shorthand for each property, comma separated.
    ///
    /// ```rust
    /// use swatch_theme::transitions::{TransitionOptions, Transitions};
    ///
    /// let transitions = Transitions::default();
    /// assert_eq!(
    ///     transitions.create(&["color", "opacity"], &TransitionOptions::default()),
    ///     "color 300ms cubic-bezier(0.4, 0, 0.2, 1) 0ms,opacity 300ms cubic-bezier(0.4, 0, 0.2, 1) 0ms"
    /// );
    /// ```
    pub fn create(&self, props: &[&str], options: &TransitionOptions) -> String {
        let props: &[&str] = if props.is_empty() { &["all"] } else { props };
        let duration = options
            .duration
            .as_ref()
            .map(format_time)
            .unwrap_or_else(|| format_ms(self.duration.standard));
        let easing = options.easing.as_deref().unwrap_or(&self.easing.standard);
        let delay = options
            .delay
            .as_ref()
            .map(format_time)
            .unwrap_or_else(|| format_ms(0.0));

        props
            .iter()
            .map(|prop| format!("{prop} {duration} {easing} {delay}"))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Duration in milliseconds for animating to `height` pixels.
    pub fn get_auto_height_duration(height: f64) -> f64 {
        if height == 0.0 || height.is_nan() {
            return 0.0;
        }
        let constant = height / 36.0;
        swatch_color::round_half_up((4.0 + 15.0 * constant.powf(0.25) + constant / 5.0) * 10.0)
    }
}

pub fn create_transitions(options: &TransitionsOptions) -> Transitions {
    let easing = Easing::default();
    let duration = Duration::default();
    let e = &options.easing;
    let d = &options.duration;

    Transitions {
        easing: Easing {
            standard: e.standard.clone().unwrap_or(easing.standard),
            decelerated: e.decelerated.clone().unwrap_or(easing.decelerated),
            accelerated: e.accelerated.clone().unwrap_or(easing.accelerated),
            sharp: e.sharp.clone().unwrap_or(easing.sharp),
        },
        duration: Duration {
            shortest: d.shortest.unwrap_or(duration.shortest),
            shorter: d.shorter.unwrap_or(duration.shorter),
            short: d.short.unwrap_or(duration.short),
            standard: d.standard.unwrap_or(duration.standard),
            complex: d.complex.unwrap_or(duration.complex),
            entering_screen: d.entering_screen.unwrap_or(duration.entering_screen),
            leaving_screen: d.leaving_screen.unwrap_or(duration.leaving_screen),
        },
    }
}
