mod common;

use common::{color, hue_distance};
use motif::color::*;

#[test]
fn test_rgb_hex_rgb_is_identity() {
    for red in (0..=255u8).step_by(5) {
        for green in (0..=255u8).step_by(15) {
            for blue in [0u8, 1, 127, 128, 254, 255] {
                let rgb = Rgb::new(red, green, blue);
                let hex = hex_from_rgb(rgb);
                assert_eq!(rgb_from_hex(&hex), Some(rgb), "round trip failed for {hex}");
            }
        }
    }
}

#[test]
fn test_hsv_rgb_hsv_stays_within_one_unit() {
    for hue in (0..360u16).step_by(7) {
        for saturation in (50..=100u8).step_by(10) {
            for value in (50..=100u8).step_by(10) {
                let hsv = Hsv::new(hue, saturation, value);
                let back = hsv_from_rgb(rgb_from_hsv(hsv));
                assert!(
                    hue_distance(back.hue, hue) <= 1,
                    "hue drifted: {hsv:?} -> {back:?}"
                );
                assert!(back.saturation.abs_diff(saturation) <= 1, "{hsv:?} -> {back:?}");
                assert!(back.value.abs_diff(value) <= 1, "{hsv:?} -> {back:?}");
            }
        }
    }
}

#[test]
fn test_known_conversions() {
    assert_eq!(rgb_from_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
    assert_eq!(rgb_from_hex("0f0"), Some(Rgb::new(0, 255, 0)));
    assert_eq!(rgb_from_hex("#12345"), None);
    assert_eq!(hex_from_rgb(Rgb::new(0, 128, 128)), "#008080");
    assert_eq!(hsv_from_rgb(Rgb::new(255, 0, 0)), Hsv::new(0, 100, 100));
    assert_eq!(hsv_from_rgb(Rgb::new(0, 0, 255)), Hsv::new(240, 100, 100));
    assert_eq!(rgb_from_hsv(Hsv::new(120, 100, 100)), Rgb::new(0, 255, 0));
    assert_eq!(normalize_hex("#ABC"), Some("#aabbcc".to_string()));
}

#[test]
fn test_hue_near_360_folds_to_zero() {
    // Pure red with a hint of blue sits at 359.x degrees and rounds to 360.
    let hsv = hsv_from_rgb(Rgb::new(255, 0, 1));
    assert!(hsv.hue < 360);
}

#[test]
fn test_is_valid_hex() {
    for valid in ["#fff", "fff", "#A1b2C3", "a1b2c3"] {
        assert!(is_valid_hex(valid), "{valid} should be valid");
    }
    for invalid in ["", "#", "#ff", "#ffff", "#ggg", "#1234567", "red"] {
        assert!(!is_valid_hex(invalid), "{invalid} should be invalid");
    }
}

#[test]
fn test_named_colors() {
    assert_eq!(hex_from_named_color("RED"), Some("#ff0000"));
    assert_eq!(hex_from_named_color(" rebeccapurple "), Some("#663399"));
    assert_eq!(hex_from_named_color("notacolor"), None);
    assert_eq!(NAMED_COLORS.len(), 148);
}

#[test]
fn test_empty_hex_is_transparent_for_any_previous() {
    let engine = ColorEngine::new();
    for previous in [None, Some(color("#336699")), Some(color("#zzzzzz"))] {
        let result = engine.from_fields(&ColorFields::hex(""), previous.as_ref());
        assert!(result.errors.is_empty());
        assert_eq!(result.hex, "");
        assert!(result.is_transparent());
    }
}

#[test]
fn test_transparent_keeps_previous_rgb() {
    let previous = color("#336699");
    let result = ColorEngine::new().from_fields(&ColorFields::hex(""), Some(&previous));
    assert_eq!(result.rgb, previous.rgb);
    assert_eq!(result.hsv, previous.hsv);
}

#[test]
fn test_invalid_hex_keeps_fallback() {
    let engine = ColorEngine::new();
    let previous = color("#336699");
    let result = engine.from_fields(&ColorFields::hex("#zzzzzz"), Some(&previous));

    assert!(result.errors.has(ColorField::Hex));
    assert_eq!(result.hex, "#zzzzzz");
    assert_eq!(result.rgb, previous.rgb);
    assert_eq!(result.hsv, previous.hsv);

    let without_previous = engine.from_fields(&ColorFields::hex("#zzzzzz"), None);
    assert_eq!(without_previous.rgb, Rgb::new(0, 0, 0));
}

#[test]
fn test_valid_hex_is_normalized() {
    let result = color("#F0A");
    assert_eq!(result.hex, "#ff00aa");
    assert_eq!(result.rgb, Rgb::new(255, 0, 170));
    assert!(!result.has_errors());
}

#[test]
fn test_rgb_fields() {
    let engine = ColorEngine::new();
    let result = engine.from_fields(&ColorFields::rgb(0.0, 128.0, 128.0), None);
    assert_eq!(result.hex, "#008080");
    assert_eq!(result.hsv, Hsv::new(180, 100, 50));
    assert!(!result.has_errors());
}

#[test]
fn test_partial_rgb_uses_previous_channels() {
    let previous = color("#102030");
    let fields = ColorFields {
        green: Some(255.0),
        ..ColorFields::default()
    };
    let result = ColorEngine::new().from_fields(&fields, Some(&previous));
    assert_eq!(result.rgb, Rgb::new(0x10, 255, 0x30));
    assert_eq!(result.hex, "#10ff30");
}

#[test]
fn test_invalid_rgb_channel_is_flagged_and_kept() {
    let previous = color("#102030");
    let engine = ColorEngine::new();

    let out_of_range = ColorFields {
        red: Some(300.0),
        ..ColorFields::default()
    };
    let result = engine.from_fields(&out_of_range, Some(&previous));
    assert!(result.errors.has(ColorField::Red));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.rgb.red, 0x10);

    let typed = ColorFields::from_text(ColorField::Blue, "abc");
    let result = engine.from_fields(&typed, Some(&previous));
    assert!(result.errors.has(ColorField::Blue));
    assert_eq!(result.rgb.blue, 0x30);

    let fractional = ColorFields::from_text(ColorField::Green, "12.5");
    let result = engine.from_fields(&fractional, Some(&previous));
    assert!(result.errors.has(ColorField::Green));
}

#[test]
fn test_hsv_fields_keep_hue_at_zero_saturation() {
    let result = ColorEngine::new().from_fields(&ColorFields::hsv(200.0, 0.0, 50.0), None);
    assert_eq!(result.hsv, Hsv::new(200, 0, 50));
    assert_eq!(result.rgb, Rgb::new(128, 128, 128));
    assert!(!result.has_errors());
}

#[test]
fn test_invalid_hsv_components() {
    let previous = color("#ff0000");
    let engine = ColorEngine::new();
    let result = engine.from_fields(&ColorFields::hsv(360.0, 101.0, -1.0), Some(&previous));
    assert!(result.errors.has(ColorField::Hue));
    assert!(result.errors.has(ColorField::Saturation));
    assert!(result.errors.has(ColorField::Value));
    assert_eq!(result.hsv, previous.hsv);
}

#[test]
fn test_hex_wins_over_rgb_and_hsv() {
    let fields = ColorFields {
        hex: Some("#00ff00".to_string()),
        red: Some(255.0),
        hue: Some(240.0),
        ..ColorFields::default()
    };
    let result = ColorEngine::new().from_fields(&fields, None);
    assert_eq!(result.hex, "#00ff00");
}

#[test]
fn test_name_only_resolves_named_color() {
    let engine = ColorEngine::new();
    let result = engine.from_fields(&ColorFields::default().with_name("Teal"), None);
    assert_eq!(result.hex, "#008080");
    assert_eq!(result.name.as_deref(), Some("teal"));

    let unknown = engine.from_fields(&ColorFields::default().with_name("mauveish"), None);
    assert!(unknown.errors.has(ColorField::Hex));
}

#[test]
fn test_empty_fields_return_previous_without_errors() {
    let engine = ColorEngine::new();
    let previous = color("#zzzzzz");
    assert!(previous.has_errors());

    let result = engine.from_fields(&ColorFields::default(), Some(&previous));
    assert!(!result.has_errors());
    assert_eq!(result.hex, previous.hex);

    assert_eq!(engine.from_fields(&ColorFields::default(), None), Color::black());
}

#[test]
fn test_custom_validator() {
    let engine = ColorEngine::builder()
        .with_hex_validator(|hex: &str| hex.len() == 7 && is_valid_hex(hex))
        .build();

    let shorthand = engine.from_fields(&ColorFields::hex("#fff"), None);
    assert!(shorthand.errors.has(ColorField::Hex));

    let full = engine.from_fields(&ColorFields::hex("#ffffff"), None);
    assert!(!full.has_errors());

    let transparent = engine.from_fields(&ColorFields::hex(""), None);
    assert!(!transparent.has_errors());
}

#[test]
fn test_permissive_validator_keeps_unparseable_text() {
    let engine = ColorEngine::builder().with_hex_validator(|_: &str| true).build();
    let previous = color("#336699");
    let result = engine.from_fields(&ColorFields::hex("brand-blue"), Some(&previous));
    assert_eq!(result.hex, "brand-blue");
    assert_eq!(result.rgb, previous.rgb);
    assert!(!result.has_errors());
}

#[test]
fn test_apply_delta_saturates() {
    let engine = ColorEngine::new();
    let previous = color("#336699");

    let darkest = engine.apply_delta(&ColorDelta::of(HsvComponent::Value, -1000), &previous);
    assert_eq!(darkest.hsv.value, 0);
    assert!(!darkest.has_errors());

    let brightest = engine.apply_delta(&ColorDelta::of(HsvComponent::Saturation, 500), &previous);
    assert_eq!(brightest.hsv.saturation, 100);

    let hue = engine.apply_delta(&ColorDelta::of(HsvComponent::Hue, 400), &previous);
    assert_eq!(hue.hsv.hue, 359);

    let hue = engine.apply_delta(&ColorDelta::of(HsvComponent::Hue, -400), &previous);
    assert_eq!(hue.hsv.hue, 0);
}

#[test]
fn test_apply_delta_extreme_deltas_saturate() {
    let engine = ColorEngine::new();
    let previous = color("#336699");

    for component in [HsvComponent::Hue, HsvComponent::Saturation, HsvComponent::Value] {
        let up = engine.apply_delta(&ColorDelta::of(component, i32::MAX), &previous);
        let down = engine.apply_delta(&ColorDelta::of(component, i32::MIN), &previous);
        assert!(!up.has_errors() && !down.has_errors());

        match component {
            HsvComponent::Hue => {
                assert_eq!(up.hsv.hue, 359);
                assert_eq!(down.hsv.hue, 0);
            }
            HsvComponent::Saturation => {
                assert_eq!(up.hsv.saturation, 100);
                assert_eq!(down.hsv.saturation, 0);
            }
            HsvComponent::Value => {
                assert_eq!(up.hsv.value, 100);
                assert_eq!(down.hsv.value, 0);
            }
        }
    }
}

#[test]
fn test_apply_delta_moves_one_component() {
    let engine = ColorEngine::new();
    let previous = engine.from_fields(&ColorFields::hsv(120.0, 50.0, 50.0), None);
    let next = engine.apply_delta(&ColorDelta::of(HsvComponent::Saturation, 10), &previous);
    assert_eq!(next.hsv, Hsv::new(120, 60, 50));
}

#[test]
fn test_color_json_shape() {
    let value = serde_json::to_value(color("#zzzzzz")).unwrap();
    assert_eq!(value["hex"], "#zzzzzz");
    assert_eq!(value["errors"]["hex"], true);
    assert_eq!(value["rgb"]["red"], 0);

    let parsed: Color = serde_json::from_value(value).unwrap();
    assert!(parsed.errors.has(ColorField::Hex));
}
