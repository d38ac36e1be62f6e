//! Elevation shadows
//!
//! Each elevation level stacks three layers (umbra, penumbra and ambient) with
//! fixed opacities, following the Material elevation model.

use tracing::warn;

pub const SHADOW_COUNT: usize = 25;

const UMBRA_OPACITY: f64 = 0.2;
const PENUMBRA_OPACITY: f64 = 0.14;
const AMBIENT_OPACITY: f64 = 0.12;

/// Offset-x, offset-y, blur and spread for the umbra, penumbra and ambient
/// layers of elevations 1 to 24.
const LAYERS: [[i32; 12]; SHADOW_COUNT - 1] = [
    [0, 2, 1, -1, 0, 1, 1, 0, 0, 1, 3, 0],
    [0, 3, 1, -2, 0, 2, 2, 0, 0, 1, 5, 0],
    [0, 3, 3, -2, 0, 3, 4, 0, 0, 1, 8, 0],
    [0, 2, 4, -1, 0, 4, 5, 0, 0, 1, 10, 0],
    [0, 3, 5, -1, 0, 5, 8, 0, 0, 1, 14, 0],
    [0, 3, 5, -1, 0, 6, 10, 0, 0, 1, 18, 0],
    [0, 4, 5, -2, 0, 7, 10, 1, 0, 2, 16, 1],
    [0, 5, 5, -3, 0, 8, 10, 1, 0, 3, 14, 2],
    [0, 5, 6, -3, 0, 9, 12, 1, 0, 3, 16, 2],
    [0, 6, 6, -3, 0, 10, 14, 1, 0, 4, 18, 3],
    [0, 6, 7, -4, 0, 11, 15, 1, 0, 4, 20, 3],
    [0, 7, 8, -4, 0, 12, 17, 2, 0, 5, 22, 4],
    [0, 7, 8, -4, 0, 13, 19, 2, 0, 5, 24, 4],
    [0, 7, 9, -4, 0, 14, 21, 2, 0, 5, 26, 4],
    [0, 8, 9, -5, 0, 15, 22, 2, 0, 6, 28, 5],
    [0, 8, 10, -5, 0, 16, 24, 2, 0, 6, 30, 5],
    [0, 8, 11, -5, 0, 17, 26, 2, 0, 6, 32, 5],
    [0, 9, 11, -5, 0, 18, 28, 2, 0, 7, 34, 6],
    [0, 9, 12, -6, 0, 19, 29, 2, 0, 7, 36, 6],
    [0, 10, 13, -6, 0, 20, 31, 3, 0, 8, 38, 7],
    [0, 10, 13, -6, 0, 21, 33, 3, 0, 8, 40, 7],
    [0, 10, 14, -6, 0, 22, 35, 3, 0, 8, 42, 7],
    [0, 11, 14, -7, 0, 23, 36, 3, 0, 9, 44, 8],
    [0, 11, 15, -7, 0, 24, 38, 3, 0, 9, 46, 8],
];

fn create_shadow(px: &[i32; 12]) -> String {
    let layer = |offset: usize, opacity: f64| {
        format!(
            "{}px {}px {}px {}px rgba(0,0,0,{opacity})",
            px[offset],
            px[offset + 1],
            px[offset + 2],
            px[offset + 3]
        )
    };
    [
        layer(0, UMBRA_OPACITY),
        layer(4, PENUMBRA_OPACITY),
        layer(8, AMBIENT_OPACITY),
    ]
    .join(",")
}

/// The 25 default elevation shadows. Index 0 is `none`.
pub fn default_shadows() -> Vec<String> {
    std::iter::once("none".to_string())
        .chain(LAYERS.iter().map(create_shadow))
        .collect()
}

/// Use `shadows` when it has exactly one entry per elevation, the defaults otherwise.
pub fn create_shadows(shadows: Option<Vec<String>>) -> Vec<String> {
    match shadows {
        Some(shadows) if shadows.len() == SHADOW_COUNT => shadows,
        Some(shadows) => {
            if cfg!(debug_assertions) {
                warn!(
                    "theme.shadows needs {SHADOW_COUNT} elevation levels, got {}. Using the defaults",
                    shadows.len()
                );
            }
            default_shadows()
        }
        None => default_shadows(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let shadows = default_shadows();
        assert_eq!(shadows.len(), SHADOW_COUNT);
        assert_eq!(shadows[0], "none");
        assert_eq!(
            shadows[1],
            "0px 2px 1px -1px rgba(0,0,0,0.2),0px 1px 1px 0px rgba(0,0,0,0.14),0px 1px 3px 0px rgba(0,0,0,0.12)"
        );
        assert_eq!(
            shadows[24],
            "0px 11px 15px -7px rgba(0,0,0,0.2),0px 24px 38px 3px rgba(0,0,0,0.14),0px 9px 46px 8px rgba(0,0,0,0.12)"
        );
    }

    #[test]
    fn wrong_length_uses_defaults() {
        assert_eq!(
            create_shadows(Some(vec!["none".into()])),
            default_shadows()
        );
        let custom: Vec<String> = (0..SHADOW_COUNT).map(|i| format!("shadow-{i}")).collect();
        assert_eq!(create_shadows(Some(custom.clone())), custom);
    }
}
