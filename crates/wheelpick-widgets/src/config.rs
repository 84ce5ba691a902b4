//! TOML configuration for a wheel picker.
//!
//! ```toml
//! background_color = "#1E1E2E"
//! height = 250.0
//! selected_index = 1
//! haptics = true
//! platform = "ios"
//!
//! [selected_style]
//! border_color = "#89B4FA"
//! border_width = 1.0
//!
//! [[items]]
//! label = "Apple"
//! value = 1
//!
//! [[items]]
//! label = "Banana"
//! ```

use crate::error::ConfigError;
use crate::wheel::{Platform, SelectedStyle, WheelItem, WheelPicker, WheelWidth};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wheelpick_core::Color;

/// Border settings as written in the config file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectedStyleConfig {
    /// Hex border color
    pub border_color: Option<String>,
    /// Border width in pixels
    pub border_width: f32,
}

/// Every option of the picker, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Items to choose from
    pub items: Vec<WheelItem>,
    /// Hex background color
    pub background_color: String,
    /// Width
    pub width: WheelWidth,
    /// Explicit viewport height
    pub height: Option<f32>,
    /// Externally controlled selection
    pub selected_index: Option<usize>,
    /// Item centred on first layout
    pub initial_selected_index: Option<usize>,
    /// Haptic pulse on touch-driven changes
    pub haptics: bool,
    /// Border framing the centred row
    pub selected_style: SelectedStyleConfig,
    /// Host platform
    pub platform: Platform,
    /// Test ID
    pub test_id: Option<String>,
    /// Accessible name
    pub accessible_name: Option<String>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            background_color: "#FFFFFF".to_string(),
            width: WheelWidth::default(),
            height: None,
            selected_index: None,
            initial_selected_index: None,
            haptics: false,
            selected_style: SelectedStyleConfig::default(),
            platform: Platform::default(),
            test_id: None,
            accessible_name: None,
        }
    }
}

impl WheelConfig {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a height is not positive.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading wheel config from {}", path.display());
        Self::from_toml_str(&source)
    }

    /// Parsed background color.
    ///
    /// # Errors
    ///
    /// Returns an error if the hex string is invalid.
    pub fn background(&self) -> Result<Color, ConfigError> {
        parse_color("background_color", &self.background_color)
    }

    /// Parsed border style.
    ///
    /// # Errors
    ///
    /// Returns an error if the border color is invalid.
    pub fn selected_style(&self) -> Result<SelectedStyle, ConfigError> {
        let border_color = self
            .selected_style
            .border_color
            .as_deref()
            .map(|hex| parse_color("selected_style.border_color", hex))
            .transpose()?;
        Ok(SelectedStyle {
            border_color,
            border_width: self.selected_style.border_width,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.height {
            Some(height) if !(height.is_finite() && height > 0.0) => {
                Err(ConfigError::InvalidHeight(height))
            }
            _ => Ok(()),
        }
    }
}

fn parse_color(field: &'static str, hex: &str) -> Result<Color, ConfigError> {
    Color::from_hex(hex).map_err(|source| ConfigError::Color { field, source })
}

impl WheelPicker {
    /// Build a picker from a config. Callbacks and the haptic engine are
    /// attached afterwards with the builder methods.
    ///
    /// # Errors
    ///
    /// Returns an error if a color is invalid.
    pub fn from_config(config: &WheelConfig) -> Result<Self, ConfigError> {
        let mut picker = Self::new()
            .items(config.items.iter().cloned())
            .width(config.width)
            .background_color(config.background()?)
            .selected_style(config.selected_style()?)
            .platform(config.platform)
            .haptics(config.haptics);

        if let Some(height) = config.height {
            picker = picker.height(height);
        }
        if let Some(index) = config.selected_index {
            picker = picker.selected_index(index);
        }
        if let Some(index) = config.initial_selected_index {
            picker = picker.initial_selected_index(index);
        }
        if let Some(id) = &config.test_id {
            picker = picker.with_test_id(id.as_str());
        }
        if let Some(name) = &config.accessible_name {
            picker = picker.with_accessible_name(name.as_str());
        }
        Ok(picker)
    }
}
