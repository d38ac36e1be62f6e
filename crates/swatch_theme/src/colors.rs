//! Material color tables and per-mode palette tokens

use indexmap::IndexMap;

/// Shade keys in table order.
pub const SHADE_KEYS: [&str; 14] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "A100", "A200", "A400",
    "A700",
];

/// A Material Design color scale (50–900, A100–A700).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialColor {
    pub name: &'static str,
    shades: [&'static str; 14],
}

impl MaterialColor {
    /// Look up a shade by key (`"500"`, `"A400"`).
    pub fn get(&self, shade: &str) -> Option<&'static str> {
        SHADE_KEYS
            .iter()
            .position(|key| *key == shade)
            .map(|index| self.shades[index])
    }

    /// Shade lookup for keys known to exist.
    pub(crate) fn shade(&self, shade: &str) -> &'static str {
        self.get(shade).unwrap_or(self.shades[5])
    }

    pub fn shades(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        SHADE_KEYS.iter().copied().zip(self.shades.iter().copied())
    }

    pub fn to_map(&self) -> IndexMap<String, String> {
        self.shades()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }
}

/// Find a table by its camelCase name.
pub fn by_name(name: &str) -> Option<&'static MaterialColor> {
    ALL.iter().copied().find(|color| color.name == name)
}

pub const ALL: [&MaterialColor; 10] = [
    &BLUE,
    &PURPLE,
    &RED,
    &ORANGE,
    &LIGHT_BLUE,
    &GREEN,
    &INDIGO,
    &DEEP_ORANGE,
    &GREY,
    &TEAL,
];

pub const BLUE: MaterialColor = MaterialColor {
    name: "blue",
    shades: [
        "#e3f2fd", "#bbdefb", "#90caf9", "#64b5f6", "#42a5f5", "#2196f3", "#1e88e5", "#1976d2",
        "#1565c0", "#0d47a1", "#82b1ff", "#448aff", "#2979ff", "#2962ff",
    ],
};

pub const PURPLE: MaterialColor = MaterialColor {
    name: "purple",
    shades: [
        "#f3e5f5", "#e1bee7", "#ce93d8", "#ba68c8", "#ab47bc", "#9c27b0", "#8e24aa", "#7b1fa2",
        "#6a1b9a", "#4a148c", "#ea80fc", "#e040fb", "#d500f9", "#aa00ff",
    ],
};

pub const RED: MaterialColor = MaterialColor {
    name: "red",
    shades: [
        "#ffebee", "#ffcdd2", "#ef9a9a", "#e57373", "#ef5350", "#f44336", "#e53935", "#d32f2f",
        "#c62828", "#b71c1c", "#ff8a80", "#ff5252", "#ff1744", "#d50000",
    ],
};

pub const ORANGE: MaterialColor = MaterialColor {
    name: "orange",
    shades: [
        "#fff3e0", "#ffe0b2", "#ffcc80", "#ffb74d", "#ffa726", "#ff9800", "#fb8c00", "#f57c00",
        "#ef6c00", "#e65100", "#ffd180", "#ffab40", "#ff9100", "#ff6d00",
    ],
};

pub const LIGHT_BLUE: MaterialColor = MaterialColor {
    name: "lightBlue",
    shades: [
        "#e1f5fe", "#b3e5fc", "#81d4fa", "#4fc3f7", "#29b6f6", "#03a9f4", "#039be5", "#0288d1",
        "#0277bd", "#01579b", "#80d8ff", "#40c4ff", "#00b0ff", "#0091ea",
    ],
};

pub const GREEN: MaterialColor = MaterialColor {
    name: "green",
    shades: [
        "#e8f5e9", "#c8e6c9", "#a5d6a7", "#81c784", "#66bb6a", "#4caf50", "#43a047", "#388e3c",
        "#2e7d32", "#1b5e20", "#b9f6ca", "#69f0ae", "#00e676", "#00c853",
    ],
};

pub const INDIGO: MaterialColor = MaterialColor {
    name: "indigo",
    shades: [
        "#e8eaf6", "#c5cae9", "#9fa8da", "#7986cb", "#5c6bc0", "#3f51b5", "#3949ab", "#303f9f",
        "#283593", "#1a237e", "#8c9eff", "#536dfe", "#3d5afe", "#304ffe",
    ],
};

pub const DEEP_ORANGE: MaterialColor = MaterialColor {
    name: "deepOrange",
    shades: [
        "#fbe9e7", "#ffccbc", "#ffab91", "#ff8a65", "#ff7043", "#ff5722", "#f4511e", "#e64a19",
        "#d84315", "#bf360c", "#ff9e80", "#ff6e40", "#ff3d00", "#dd2c00",
    ],
};

pub const TEAL: MaterialColor = MaterialColor {
    name: "teal",
    shades: [
        "#e0f2f1", "#b2dfdb", "#80cbc4", "#4db6ac", "#26a69a", "#009688", "#00897b", "#00796b",
        "#00695c", "#004d40", "#a7ffeb", "#64ffda", "#1de9b6", "#00bfa5",
    ],
};

pub const GREY: MaterialColor = MaterialColor {
    name: "grey",
    shades: [
        "#fafafa", "#f5f5f5", "#eeeeee", "#e0e0e0", "#bdbdbd", "#9e9e9e", "#757575", "#616161",
        "#424242", "#212121", "#f5f5f5", "#eeeeee", "#bdbdbd", "#616161",
    ],
};

pub mod common {
    pub const BLACK: &str = "#000";
    pub const WHITE: &str = "#fff";
}

/// Text, divider, background and action tokens for one palette mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeTokens {
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_disabled: &'static str,
    pub text_icon: Option<&'static str>,
    pub divider: &'static str,
    pub background_paper: &'static str,
    pub background_default: &'static str,
    pub action_active: &'static str,
    pub action_hover: &'static str,
    pub action_hover_opacity: f64,
    pub action_selected: &'static str,
    pub action_selected_opacity: f64,
    pub action_disabled: &'static str,
    pub action_disabled_background: &'static str,
    pub action_disabled_opacity: f64,
    pub action_focus: &'static str,
    pub action_focus_opacity: f64,
    pub action_activated_opacity: f64,
}

pub const LIGHT: ModeTokens = ModeTokens {
    text_primary: "rgba(0, 0, 0, 0.87)",
    text_secondary: "rgba(0, 0, 0, 0.6)",
    text_disabled: "rgba(0, 0, 0, 0.38)",
    text_icon: None,
    divider: "rgba(0, 0, 0, 0.12)",
    background_paper: common::WHITE,
    background_default: common::WHITE,
    action_active: "rgba(0, 0, 0, 0.54)",
    action_hover: "rgba(0, 0, 0, 0.04)",
    action_hover_opacity: 0.04,
    action_selected: "rgba(0, 0, 0, 0.08)",
    action_selected_opacity: 0.08,
    action_disabled: "rgba(0, 0, 0, 0.26)",
    action_disabled_background: "rgba(0, 0, 0, 0.12)",
    action_disabled_opacity: 0.38,
    action_focus: "rgba(0, 0, 0, 0.12)",
    action_focus_opacity: 0.12,
    action_activated_opacity: 0.12,
};

pub const DARK: ModeTokens = ModeTokens {
    text_primary: common::WHITE,
    text_secondary: "rgba(255, 255, 255, 0.7)",
    text_disabled: "rgba(255, 255, 255, 0.5)",
    text_icon: Some("rgba(255, 255, 255, 0.5)"),
    divider: "rgba(255, 255, 255, 0.12)",
    background_paper: "#121212",
    background_default: "#121212",
    action_active: common::WHITE,
    action_hover: "rgba(255, 255, 255, 0.08)",
    action_hover_opacity: 0.08,
    action_selected: "rgba(255, 255, 255, 0.16)",
    action_selected_opacity: 0.16,
    action_disabled: "rgba(255, 255, 255, 0.3)",
    action_disabled_background: "rgba(255, 255, 255, 0.12)",
    action_disabled_opacity: 0.38,
    action_focus: "rgba(255, 255, 255, 0.12)",
    action_focus_opacity: 0.12,
    action_activated_opacity: 0.24,
};
