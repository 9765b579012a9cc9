use super::conversion::is_valid_hex;
use super::engine::{ColorEngine, HexValidator};
use super::model::{Color, ColorDelta, ColorFields, HsvComponent};
use super::named::hex_from_named_color;
use super::swatch::{DEFAULT_SWATCH_COLORS, NavigationKey, TextDirection, swatch_for_key};
use crate::error::PickerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Which tabs the picker popover offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerVariant {
    #[default]
    Base,
    Swatches,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerTab {
    #[default]
    Swatches,
    Custom,
}

/// Static configuration of a color picker, loadable from the host's JSON props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerConfig {
    pub swatch_colors: Vec<String>,
    pub variant: PickerVariant,
    pub default_selected_tab: PickerTab,
    pub hide_input: bool,
    pub direction: TextDirection,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            swatch_colors: DEFAULT_SWATCH_COLORS.iter().map(|c| c.to_string()).collect(),
            variant: PickerVariant::default(),
            default_selected_tab: PickerTab::default(),
            hide_input: false,
            direction: TextDirection::default(),
        }
    }
}

impl PickerConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn shows_swatch_tab(&self) -> bool {
        matches!(self.variant, PickerVariant::Base | PickerVariant::Swatches)
    }

    pub fn shows_custom_tab(&self) -> bool {
        matches!(self.variant, PickerVariant::Base | PickerVariant::Custom)
    }

    /// Index of the tab selected when the popover opens.
    pub fn initial_tab_index(&self) -> usize {
        match self.default_selected_tab {
            PickerTab::Custom => 1,
            PickerTab::Swatches => 0,
        }
    }
}

/// Emitted whenever the committed color text changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub color: String,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CloseTrigger {
    Cancel,
    ClickOutside,
    NewPopover,
}

/// The bounding box of the saturation/value grid, in the host's pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

/// Maps a pointer position on the grid to saturation (x) and value (y, upwards).
pub fn saturation_value_at(x: f64, y: f64, rect: GridRect) -> (f64, f64) {
    let saturation = ((x - rect.left) / rect.width * 100.0).round();
    let value = ((rect.bottom - y) / rect.height * 100.0).round();
    (saturation, value)
}

/// Fields for text typed into a color input: a CSS color name resolves to its
/// hex and keeps the name, anything else is taken as hex.
fn fields_for_text(text: &str) -> ColorFields {
    match hex_from_named_color(text) {
        Some(hex) => ColorFields::hex(hex).with_name(text.trim()),
        None => ColorFields::hex(text),
    }
}

/// State of one color picker: the committed value, the working color being
/// edited in the popover, and the working color before the last edit.
pub struct ColorPicker {
    config: PickerConfig,
    engine: ColorEngine,
    validate_color: Option<Arc<dyn HexValidator>>,
    current: String,
    working: Color,
    previous_working: Color,
    is_open: bool,
    error: Option<PickerError>,
}

impl fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPicker")
            .field("current", &self.current)
            .field("working", &self.working)
            .field("previous_working", &self.previous_working)
            .field("is_open", &self.is_open)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

pub struct ColorPickerBuilder {
    config: PickerConfig,
    validate_color: Option<Arc<dyn HexValidator>>,
    validate_working_color: Option<Arc<dyn HexValidator>>,
    value: Option<String>,
    value_working: Option<String>,
    is_open: bool,
}

impl ColorPickerBuilder {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            validate_color: None,
            validate_working_color: None,
            value: None,
            value_working: None,
            is_open: false,
        }
    }

    /// Replaces the validity rule for the outer text input.
    pub fn with_color_validator(mut self, validator: impl HexValidator + 'static) -> Self {
        self.validate_color = Some(Arc::new(validator));
        self
    }

    /// Replaces the validity rule for hex input inside the custom tab.
    pub fn with_working_color_validator(mut self, validator: impl HexValidator + 'static) -> Self {
        self.validate_working_color = Some(Arc::new(validator));
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn value_working(mut self, value: impl Into<String>) -> Self {
        self.value_working = Some(value.into());
        self
    }

    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn build(self) -> ColorPicker {
        let engine = ColorEngine::builder()
            .with_shared_validator(self.validate_working_color)
            .build();
        let initial = match self.value_working.as_ref().or(self.value.as_ref()) {
            Some(text) => fields_for_text(text),
            None => ColorFields::default(),
        };
        let working = engine.from_fields(&initial, None);

        ColorPicker {
            config: self.config,
            engine,
            validate_color: self.validate_color,
            current: self.value.unwrap_or_default(),
            previous_working: working.clone(),
            working,
            is_open: self.is_open,
            error: None,
        }
    }
}

impl ColorPicker {
    /// A picker with the default validators. `value_working` defaults to `value`.
    pub fn new(config: PickerConfig, value: &str, value_working: Option<&str>) -> Self {
        let builder = ColorPickerBuilder::new(config).value(value);
        match value_working {
            Some(working) => builder.value_working(working),
            None => builder,
        }
        .build()
    }

    pub fn builder(config: PickerConfig) -> ColorPickerBuilder {
        ColorPickerBuilder::new(config)
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The committed color text, exactly as last typed or submitted.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn working(&self) -> &Color {
        &self.working
    }

    pub fn previous_working(&self) -> &Color {
        &self.previous_working
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn error(&self) -> Option<PickerError> {
        self.error
    }

    /// The color the HSV grid should show. A transparent working color falls back
    /// to the previous working color when it has one, otherwise black.
    pub fn display_color(&self) -> Color {
        if !self.working.is_transparent() {
            return self.working.clone();
        }
        if !self.previous_working.hex.is_empty() {
            return self.previous_working.clone();
        }
        self.engine
            .from_fields(&ColorFields::hex(Color::BLACK_HEX), None)
    }

    /// Host-controlled update of the committed value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.current = value.into();
    }

    /// Host-controlled update of the working color.
    pub fn set_value_working(&mut self, value: &str) {
        self.working = self.engine.from_fields(&fields_for_text(value), None);
    }

    /// Handles typing into the outer text input. Named colors are resolved first;
    /// an empty input is a valid transparent color.
    pub fn handle_hex_input(&mut self, text: &str) -> ChangeEvent {
        let named_hex = hex_from_named_color(text);
        let is_valid = match &self.validate_color {
            Some(validator) => validator.validate(text),
            None => named_hex.is_some() || text.is_empty() || is_valid_hex(text),
        };

        self.current = text.to_string();
        self.working = self.engine.from_fields(&fields_for_text(text), None);
        self.error = (!is_valid).then_some(PickerError::InvalidColor);

        if is_valid {
            debug!(color = text, "color input changed");
        } else {
            warn!(color = text, "invalid color input");
        }
        ChangeEvent {
            color: text.to_string(),
            is_valid,
        }
    }

    /// Applies a partial update to the working color and returns the new color.
    pub fn set_working(&mut self, fields: &ColorFields) -> Color {
        let next = self.engine.from_fields(fields, Some(&self.working));
        self.replace_working(next)
    }

    pub fn set_hue(&mut self, hue: f64) -> Color {
        self.set_working(&ColorFields {
            hue: Some(hue),
            ..ColorFields::default()
        })
    }

    pub fn select_swatch(&mut self, hex: &str) -> Color {
        self.set_working(&ColorFields::hex(hex))
    }

    /// Picks saturation and value from a click on the grid.
    pub fn select_saturation_value_at(&mut self, x: f64, y: f64, rect: GridRect) -> Color {
        let (saturation, value) = saturation_value_at(x, y, rect);
        self.set_working(&ColorFields {
            saturation: Some(saturation),
            value: Some(value),
            ..ColorFields::default()
        })
    }

    pub fn navigate(&mut self, component: HsvComponent, delta: i32) -> Color {
        let next = self
            .engine
            .apply_delta(&ColorDelta::of(component, delta), &self.working);
        self.replace_working(next)
    }

    /// Arrow keys on the grid: left/right move saturation, up/down move value.
    /// Holding shift moves in steps of ten.
    pub fn navigate_key(&mut self, key: NavigationKey, shift: bool) -> Color {
        let step = if shift { 10 } else { 1 };
        match key {
            NavigationKey::Left => self.navigate(HsvComponent::Saturation, -step),
            NavigationKey::Right => self.navigate(HsvComponent::Saturation, step),
            NavigationKey::Up => self.navigate(HsvComponent::Value, step),
            NavigationKey::Down => self.navigate(HsvComponent::Value, -step),
        }
    }

    /// Arrow keys on the swatch tab. `None` when the palette is empty.
    pub fn swatch_key(&mut self, key: NavigationKey) -> Option<Color> {
        let target = swatch_for_key(
            &self.config.swatch_colors,
            &self.working.hex,
            key,
            self.config.direction,
        )?
        .to_string();
        Some(self.select_swatch(&target))
    }

    /// Opens or closes the popover, re-deriving the working color from its hex.
    pub fn toggle_open(&mut self) -> bool {
        let mut fields = ColorFields::hex(self.working.hex.clone());
        fields.name = self.working.name.clone();
        self.working = self.engine.from_fields(&fields, None);
        self.is_open = !self.is_open;
        debug!(is_open = self.is_open, "color picker toggled");
        self.is_open
    }

    /// Closes the popover. Cancelling and clicking outside discard the working
    /// color in favour of the committed value.
    pub fn request_close(&mut self, trigger: CloseTrigger) -> CloseTrigger {
        if matches!(trigger, CloseTrigger::Cancel | CloseTrigger::ClickOutside) {
            let reverted = self
                .engine
                .from_fields(&fields_for_text(&self.current), None);
            self.previous_working = reverted.clone();
            self.working = reverted;
            self.is_open = false;
            debug!(?trigger, "color picker closed, working color reverted");
        }
        trigger
    }

    pub fn cancel(&mut self) -> CloseTrigger {
        self.request_close(CloseTrigger::Cancel)
    }

    pub fn can_submit(&self) -> bool {
        !self.working.has_errors()
    }

    /// Commits the working color. Refused while the working color has errors.
    pub fn submit(&mut self) -> Option<ChangeEvent> {
        if !self.can_submit() {
            warn!(hex = %self.working.hex, "refusing to submit invalid working color");
            return None;
        }
        self.is_open = false;
        self.current = self.working.hex.clone();
        self.error = None;
        Some(ChangeEvent {
            color: self.current.clone(),
            is_valid: true,
        })
    }

    fn replace_working(&mut self, next: Color) -> Color {
        self.previous_working = std::mem::replace(&mut self.working, next);
        self.working.clone()
    }
}
