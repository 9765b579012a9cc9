use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Hue in degrees `[0, 360)`, saturation and value in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: u16,
    pub saturation: u8,
    pub value: u8,
}

impl Hsv {
    pub const fn new(hue: u16, saturation: u8, value: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// The individually validated inputs of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorField {
    Hex,
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Value,
}

impl fmt::Display for ColorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorField::Hex => "hex",
            ColorField::Red => "red",
            ColorField::Green => "green",
            ColorField::Blue => "blue",
            ColorField::Hue => "hue",
            ColorField::Saturation => "saturation",
            ColorField::Value => "value",
        };
        f.write_str(name)
    }
}

/// The set of fields that failed validation while building a `Color`.
///
/// Serializes as `{ "hex": true, ... }` so hosts can render inline messages per field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorErrors(BTreeSet<ColorField>);

impl ColorErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ColorField) {
        self.0.insert(field);
    }

    pub fn has(&self, field: ColorField) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ColorField> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ColorField> for ColorErrors {
    fn from_iter<I: IntoIterator<Item = ColorField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for ColorErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for field in &self.0 {
            map.serialize_entry(field, &true)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColorErrors {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flags = std::collections::BTreeMap::<ColorField, bool>::deserialize(deserializer)?;
        Ok(flags
            .into_iter()
            .filter_map(|(field, flagged)| flagged.then_some(field))
            .collect())
    }
}

/// A color kept consistently in hex, RGB and HSV form.
///
/// An empty `hex` means transparent; `rgb` and `hsv` then hold the last known
/// color (or black) so the HSV grid still has something to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub hex: String,
    pub rgb: Rgb,
    pub hsv: Hsv,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub errors: ColorErrors,
}

impl Color {
    pub const BLACK_HEX: &'static str = "#000000";

    /// Opaque black, the fallback whenever no previous color is known.
    pub fn black() -> Self {
        Self {
            hex: Self::BLACK_HEX.to_string(),
            rgb: Rgb::default(),
            hsv: Hsv::default(),
            name: None,
            errors: ColorErrors::new(),
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.hex.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// A partial color update. Numeric fields are `f64` so text input can be carried
/// through unchanged; anything that is not an in-range integer fails validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorFields {
    pub hex: Option<String>,
    pub red: Option<f64>,
    pub green: Option<f64>,
    pub blue: Option<f64>,
    pub hue: Option<f64>,
    pub saturation: Option<f64>,
    pub value: Option<f64>,
    pub name: Option<String>,
}

impl ColorFields {
    pub fn hex(hex: impl Into<String>) -> Self {
        Self {
            hex: Some(hex.into()),
            ..Self::default()
        }
    }

    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
            ..Self::default()
        }
    }

    pub fn hsv(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue: Some(hue),
            saturation: Some(saturation),
            value: Some(value),
            ..Self::default()
        }
    }

    /// Builds a single-field update from raw input text, as typed into a form field.
    /// Unparseable numbers become `NaN` and are flagged by the engine.
    pub fn from_text(field: ColorField, text: &str) -> Self {
        let number = || text.trim().parse::<f64>().unwrap_or(f64::NAN);
        let mut fields = Self::default();
        match field {
            ColorField::Hex => fields.hex = Some(text.to_string()),
            ColorField::Red => fields.red = Some(number()),
            ColorField::Green => fields.green = Some(number()),
            ColorField::Blue => fields.blue = Some(number()),
            ColorField::Hue => fields.hue = Some(number()),
            ColorField::Saturation => fields.saturation = Some(number()),
            ColorField::Value => fields.value = Some(number()),
        }
        fields
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn has_rgb(&self) -> bool {
        self.red.is_some() || self.green.is_some() || self.blue.is_some()
    }

    pub(crate) fn has_hsv(&self) -> bool {
        self.hue.is_some() || self.saturation.is_some() || self.value.is_some()
    }
}

/// Signed HSV adjustments, as produced by keyboard navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDelta {
    #[serde(default)]
    pub hue: i32,
    #[serde(default)]
    pub saturation: i32,
    #[serde(default)]
    pub value: i32,
}

/// The HSV component a delta or navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HsvComponent {
    Hue,
    Saturation,
    Value,
}

impl ColorDelta {
    pub fn of(component: HsvComponent, delta: i32) -> Self {
        let mut out = Self::default();
        match component {
            HsvComponent::Hue => out.hue = delta,
            HsvComponent::Saturation => out.saturation = delta,
            HsvComponent::Value => out.value = delta,
        }
        out
    }
}
