use pretty_assertions::assert_eq;
use swatch_color::{
    alpha, darken, decompose_color, get_contrast_ratio, get_luminance, hex_to_rgb, lighten,
    rgb_to_hex, ColorError, ColorFormat,
};

const SAMPLES: [&str; 8] = [
    "#000",
    "#fff",
    "#9f3",
    "#a94fd3",
    "#1976d2",
    "rgb(127, 127, 127)",
    "rgba(255, 127, 0, 0.5)",
    "hsl(281, 60%, 57%)",
];

#[test]
fn hex_to_rgb_matches_direct_decomposition() {
    for hex in ["#000", "#fff", "#9f3", "#a94fd3", "#111111f8", "#ABCDEF"] {
        let via_rgb = decompose_color(hex_to_rgb(hex).unwrap().as_str()).unwrap();
        let direct = decompose_color(hex).unwrap();
        assert_eq!(via_rgb.values(), direct.values(), "Hex {hex} should round-trip");
        assert_eq!(rgb_to_hex(hex).unwrap(), hex);
    }
}

#[test]
fn darken_and_lighten_endpoints() {
    for color in SAMPLES {
        let original = decompose_color(color).unwrap();

        let unchanged = decompose_color(darken(color, 0.0).unwrap().as_str()).unwrap();
        let unchanged_light = decompose_color(lighten(color, 0.0).unwrap().as_str()).unwrap();
        let truncated = original.channels().map(|v| {
            if original.format().is_hsl() {
                v
            } else {
                v.trunc()
            }
        });
        assert_eq!(unchanged.channels(), truncated, "darken({color}, 0) is a no-op");
        assert_eq!(unchanged_light.channels(), truncated, "lighten({color}, 0) is a no-op");

        let black = decompose_color(darken(color, 1.0).unwrap().as_str()).unwrap();
        let white = decompose_color(lighten(color, 1.0).unwrap().as_str()).unwrap();
        if original.format().is_hsl() {
            assert_eq!(black.channels()[2], 0.0);
            assert_eq!(white.channels()[2], 100.0);
        } else {
            assert_eq!(black.channels(), [0.0; 3]);
            assert_eq!(white.channels(), [255.0; 3]);
        }
        assert_eq!(black.alpha(), original.alpha());
    }
}

#[test]
fn contrast_ratio_bounds() {
    for color in SAMPLES {
        assert_eq!(get_contrast_ratio(color, color).unwrap(), 1.0);
    }
    assert_eq!(get_contrast_ratio("#000", "#FFF").unwrap(), 21.0);
    assert!((get_contrast_ratio("#707070", "#E5E5E5").unwrap() - 3.93).abs() < 0.01);
    assert!((get_contrast_ratio("#000", "#888").unwrap() - 5.92).abs() < 0.01);
}

#[test]
fn luminance_values() {
    assert_eq!(get_luminance("rgb(0, 0, 0)").unwrap(), 0.0);
    assert_eq!(get_luminance("rgb(255, 255, 255)").unwrap(), 1.0);
    assert_eq!(get_luminance("rgb(255, 127, 0)").unwrap(), 0.364);
    assert_eq!(get_luminance("hsl(100, 100%, 50%)").unwrap(), 0.735);
    assert_eq!(
        get_luminance("hsl(100, 100%, 50%)").unwrap(),
        get_luminance("rgb(85, 255, 0)").unwrap()
    );
}

#[test]
fn documented_conversions() {
    assert_eq!(hex_to_rgb("#9f3").unwrap(), "rgb(153, 255, 51)");
    assert_eq!(hex_to_rgb("#111111f8").unwrap(), "rgba(17, 17, 17, 0.973)");
    assert_eq!(lighten("rgb(255, 0, 0)", 0.5).unwrap(), "rgb(255, 127, 127)");
    assert_eq!(lighten("rgb(127, 127, 127)", 0.5).unwrap(), "rgb(191, 191, 191)");
    assert_eq!(
        alpha("color(display-p3 1 2 3)", 0.4).unwrap(),
        "color(display-p3 1 2 3 /0.4)"
    );
}

#[test]
fn errors_surface_through_every_operation() {
    assert!(matches!(
        darken("hsv(0, 0, 0)", 0.1),
        Err(ColorError::InvalidColorFormat(_))
    ));
    assert!(matches!(
        get_luminance("color(xyz 0 0 0)"),
        Err(ColorError::InvalidColorSpace(_))
    ));
    assert!(matches!(
        alpha("rgb(1, 2, 3, 4, 5)", 0.5),
        Err(ColorError::InvalidColorValue { .. })
    ));
}

#[test]
fn decomposed_objects_flow_between_operations() {
    let color = decompose_color("hsl(0, 100%, 50%)").unwrap();
    assert_eq!(color.format(), ColorFormat::Hsl);
    assert_eq!(darken(&color, 0.5).unwrap(), "hsl(0, 100%, 25%)");
    assert_eq!(rgb_to_hex(color).unwrap(), "#ff0000");
}
