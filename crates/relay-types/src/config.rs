//! Application configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working 800x600 command window.

use std::path::Path;

use serde::Deserialize;

use crate::error::{RelayError, Result};

/// Default text field capacity in characters.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Default cursor blink half-period in seconds.
pub const DEFAULT_BLINK_INTERVAL_SECS: f64 = 0.5;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Window title.
    pub window_title: String,
    /// Window width in pixels.
    pub screen_width: u32,
    /// Window height in pixels.
    pub screen_height: u32,
    /// Frame rate cap for the redraw loop.
    pub target_fps: u32,
    /// Built-in theme name: `classic`, `dark`, `light`, or `high_contrast`.
    pub theme: String,
    /// Text shown in the empty text field.
    pub placeholder: String,
    /// Text field behavior.
    pub text_field: TextFieldConfig,
}

/// Text field behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextFieldConfig {
    /// Maximum number of characters the field accepts.
    pub max_length: usize,
    /// Seconds between cursor blink toggles.
    pub blink_interval_secs: f64,
    /// Which clipboard backs copy/cut/paste.
    pub clipboard: ClipboardMode,
}

/// Clipboard source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardMode {
    /// The OS clipboard via the platform backend.
    System,
    /// A private in-process clipboard.
    Memory,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            window_title: "Relay Command Box".to_string(),
            screen_width: 800,
            screen_height: 600,
            target_fps: 60,
            theme: "classic".to_string(),
            placeholder: "Type a command...".to_string(),
            text_field: TextFieldConfig::default(),
        }
    }
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            blink_interval_secs: DEFAULT_BLINK_INTERVAL_SECS,
            clipboard: ClipboardMode::System,
        }
    }
}

impl RelayConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the widgets cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(RelayError::Config(format!(
                "screen size must be non-zero, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.target_fps == 0 {
            return Err(RelayError::Config("target_fps must be positive".into()));
        }
        if self.text_field.max_length == 0 {
            return Err(RelayError::Config(
                "text_field.max_length must be positive".into(),
            ));
        }
        if !(self.text_field.blink_interval_secs > 0.0) {
            return Err(RelayError::Config(format!(
                "text_field.blink_interval_secs must be positive, got {}",
                self.text_field.blink_interval_secs
            )));
        }
        Ok(())
    }
}
