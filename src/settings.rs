//! Host and debug preferences
//!
//! Persisted separately from gameplay tuning as a small JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, PIXEL_SCALE};
use crate::error::ConfigError;
use crate::sim::Field;

/// Window and debug settings handed to the host engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    /// Screen width in pixels (field units)
    pub width: u32,
    /// Screen height in pixels (field units)
    pub height: u32,
    /// Host pixel size multiplier
    pub pixel_scale: u32,

    // === Debug ===
    /// Draw asteroid collision circles
    pub debug_collision: bool,

    // === Determinism ===
    /// Fixed RNG seed; `None` lets the host pick one
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH as u32,
            height: FIELD_HEIGHT as u32,
            pixel_scale: PIXEL_SCALE,
            debug_collision: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Play-field bounds matching the window
    pub fn field(&self) -> Field {
        Field::new(self.width as f32, self.height as f32)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::invalid("width", "window must be non-empty"));
        }
        if self.pixel_scale == 0 {
            return Err(ConfigError::invalid("pixel_scale", "must be at least 1"));
        }
        Ok(())
    }

    /// Load settings from a JSON file, falling back to defaults if it is missing
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
