//! Conversions between hex, RGB and HSV.
//!
//! All HSV math runs in `f64` and rounds half away from zero on the way back to
//! integers, so RGB -> hex -> RGB is lossless and HSV round trips drift by at most
//! one unit outside the heavily quantized dark/desaturated corner.

use super::model::{Hsv, Rgb};

/// True iff `value` is 3 or 6 hex digits, optionally prefixed with `#`.
pub fn is_valid_hex(value: &str) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parses a 3- or 6-digit hex string (with or without `#`) into RGB.
pub fn rgb_from_hex(value: &str) -> Option<Rgb> {
    if !is_valid_hex(value) {
        return None;
    }
    let digits = value.strip_prefix('#').unwrap_or(value);

    // `#abc` is shorthand for `#aabbcc`.
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&expanded[range], 16).ok();
    Some(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Formats RGB as a normalized lowercase `#rrggbb` string.
pub fn hex_from_rgb(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}

/// Normalizes any valid hex string to `#rrggbb`.
pub fn normalize_hex(value: &str) -> Option<String> {
    rgb_from_hex(value).map(hex_from_rgb)
}

pub fn hsv_from_rgb(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.red) / 255.0;
    let g = f64::from(rgb.green) / 255.0;
    let b = f64::from(rgb.blue) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let saturation = if max == 0.0 { 0.0 } else { delta / max * 100.0 };
    let value = max * 100.0;

    Hsv {
        hue: (hue.round() as u16) % 360,
        saturation: saturation.round() as u8,
        value: value.round() as u8,
    }
}

pub fn rgb_from_hsv(hsv: Hsv) -> Rgb {
    let h = f64::from(hsv.hue % 360) / 60.0;
    let s = f64::from(hsv.saturation.min(100)) / 100.0;
    let v = f64::from(hsv.value.min(100)) / 100.0;

    let chroma = v * s;
    let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = match h as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let to_channel = |c: f64| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}
