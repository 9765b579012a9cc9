use super::conversion::{hex_from_rgb, hsv_from_rgb, is_valid_hex, rgb_from_hex, rgb_from_hsv};
use super::model::{Color, ColorDelta, ColorErrors, ColorField, ColorFields, Hsv, Rgb};
use super::named::hex_from_named_color;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Decides whether a candidate hex string is acceptable.
///
/// Hosts install one to replace the default `is_valid_hex` rule, e.g. to forbid
/// shorthand or restrict input to a brand palette.
pub trait HexValidator: Send + Sync {
    fn validate(&self, hex: &str) -> bool;
}

impl<F> HexValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, hex: &str) -> bool {
        self(hex)
    }
}

/// Builds complete, validated colors from partial input.
///
/// The engine is stateless apart from its optional validator; every call returns
/// a fresh `Color` and never touches its inputs.
#[derive(Clone, Default)]
pub struct ColorEngine {
    validator: Option<Arc<dyn HexValidator>>,
}

impl fmt::Debug for ColorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorEngine")
            .field("custom_validator", &self.validator.is_some())
            .finish()
    }
}

pub struct ColorEngineBuilder {
    validator: Option<Arc<dyn HexValidator>>,
}

impl ColorEngineBuilder {
    pub fn new() -> Self {
        Self { validator: None }
    }

    pub fn with_hex_validator(mut self, validator: impl HexValidator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn with_shared_validator(mut self, validator: Option<Arc<dyn HexValidator>>) -> Self {
        self.validator = validator;
        self
    }

    pub fn build(self) -> ColorEngine {
        ColorEngine {
            validator: self.validator,
        }
    }
}

impl Default for ColorEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ColorEngineBuilder {
        ColorEngineBuilder::new()
    }

    fn is_acceptable(&self, hex: &str) -> bool {
        match &self.validator {
            Some(validator) => validator.validate(hex),
            None => is_valid_hex(hex),
        }
    }

    /// Produces a consistent color from any subset of fields.
    ///
    /// `hex` takes precedence over RGB channels, which take precedence over HSV
    /// components. Fields that fail validation are flagged in `errors` and keep
    /// the value from `previous` (or black).
    pub fn from_fields(&self, fields: &ColorFields, previous: Option<&Color>) -> Color {
        let fallback = previous.cloned().unwrap_or_else(Color::black);
        let name = fields.name.as_deref().map(str::to_ascii_lowercase);

        if let Some(hex) = &fields.hex {
            return self.color_from_hex(hex, name, &fallback);
        }
        if fields.has_rgb() {
            return self.color_from_rgb(fields, &fallback);
        }
        if fields.has_hsv() {
            return self.color_from_hsv(fields, &fallback);
        }
        if let Some(name) = name {
            return match hex_from_named_color(&name) {
                Some(hex) => self.color_from_hex(hex, Some(name), &fallback),
                None => {
                    warn!(name = %name, "unknown named color");
                    Color {
                        hex: name,
                        errors: std::iter::once(ColorField::Hex).collect(),
                        name: None,
                        ..fallback
                    }
                }
            };
        }

        Color {
            errors: ColorErrors::new(),
            ..fallback
        }
    }

    /// Nudges the HSV components of `previous` by the given deltas, saturating at
    /// the range boundaries rather than wrapping.
    pub fn apply_delta(&self, delta: &ColorDelta, previous: &Color) -> Color {
        let hsv = previous.hsv;
        let hue = i32::from(hsv.hue).saturating_add(delta.hue).clamp(0, 359);
        let saturation = i32::from(hsv.saturation)
            .saturating_add(delta.saturation)
            .clamp(0, 100);
        let value = i32::from(hsv.value).saturating_add(delta.value).clamp(0, 100);
        debug!(?delta, hue, saturation, value, "applying color delta");

        let fields = ColorFields::hsv(f64::from(hue), f64::from(saturation), f64::from(value));
        self.from_fields(&fields, Some(previous))
    }

    fn color_from_hex(&self, hex: &str, name: Option<String>, fallback: &Color) -> Color {
        if hex.is_empty() {
            return Color {
                hex: String::new(),
                rgb: fallback.rgb,
                hsv: fallback.hsv,
                name: None,
                errors: ColorErrors::new(),
            };
        }

        if !self.is_acceptable(hex) {
            warn!(hex, "rejected hex color");
            return Color {
                hex: hex.to_string(),
                rgb: fallback.rgb,
                hsv: fallback.hsv,
                name,
                errors: std::iter::once(ColorField::Hex).collect(),
            };
        }

        match rgb_from_hex(hex) {
            Some(rgb) => Color {
                hex: hex_from_rgb(rgb),
                rgb,
                hsv: hsv_from_rgb(rgb),
                name,
                errors: ColorErrors::new(),
            },
            // A custom validator accepted text we cannot parse; keep it verbatim.
            None => Color {
                hex: hex.to_string(),
                rgb: fallback.rgb,
                hsv: fallback.hsv,
                name,
                errors: ColorErrors::new(),
            },
        }
    }

    fn color_from_rgb(&self, fields: &ColorFields, fallback: &Color) -> Color {
        let mut errors = ColorErrors::new();
        let previous = fallback.rgb;
        let rgb = Rgb {
            red: checked_component(fields.red, previous.red, 255, ColorField::Red, &mut errors),
            green: checked_component(
                fields.green,
                previous.green,
                255,
                ColorField::Green,
                &mut errors,
            ),
            blue: checked_component(fields.blue, previous.blue, 255, ColorField::Blue, &mut errors),
        };

        Color {
            hex: hex_from_rgb(rgb),
            rgb,
            hsv: hsv_from_rgb(rgb),
            name: None,
            errors,
        }
    }

    fn color_from_hsv(&self, fields: &ColorFields, fallback: &Color) -> Color {
        let mut errors = ColorErrors::new();
        let previous = fallback.hsv;
        let hue = match fields.hue {
            Some(h) if is_integer_in(h, 359) => h as u16,
            Some(_) => {
                errors.insert(ColorField::Hue);
                previous.hue
            }
            None => previous.hue,
        };
        let hsv = Hsv {
            hue,
            saturation: checked_component(
                fields.saturation,
                previous.saturation,
                100,
                ColorField::Saturation,
                &mut errors,
            ),
            value: checked_component(
                fields.value,
                previous.value,
                100,
                ColorField::Value,
                &mut errors,
            ),
        };

        let rgb = rgb_from_hsv(hsv);
        Color {
            hex: hex_from_rgb(rgb),
            rgb,
            hsv,
            name: None,
            errors,
        }
    }
}

fn is_integer_in(candidate: f64, max: u16) -> bool {
    candidate.fract() == 0.0 && (0.0..=f64::from(max)).contains(&candidate)
}

/// Validates one 8-bit component, falling back to `previous` and flagging `field`.
fn checked_component(
    candidate: Option<f64>,
    previous: u8,
    max: u8,
    field: ColorField,
    errors: &mut ColorErrors,
) -> u8 {
    match candidate {
        None => previous,
        Some(c) if is_integer_in(c, u16::from(max)) => c as u8,
        Some(_) => {
            errors.insert(field);
            previous
        }
    }
}
