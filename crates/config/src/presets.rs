//! Display presets (`presets.json`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    GeometryLimits, DEFAULT_FRAMERATE, DEFAULT_MINIMUM_COLUMNS, DEFAULT_MINIMUM_ROWS,
    DEFAULT_REQUIRED_COLUMNS, DEFAULT_REQUIRED_ROWS,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Presets {
    pub minimum_columns: u16,
    pub minimum_rows: u16,
    pub required_columns: u16,
    pub required_rows: u16,
    /// Ticks per second.
    pub framerate: u32,
}

impl Default for Presets {
    fn default() -> Self {
        Self {
            minimum_columns: DEFAULT_MINIMUM_COLUMNS,
            minimum_rows: DEFAULT_MINIMUM_ROWS,
            required_columns: DEFAULT_REQUIRED_COLUMNS,
            required_rows: DEFAULT_REQUIRED_ROWS,
            framerate: DEFAULT_FRAMERATE,
        }
    }
}

impl Presets {
    /// Read presets from `path`, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "presets file not found, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| ConfigError::parse(path, e))
    }

    pub fn limits(&self) -> GeometryLimits {
        GeometryLimits {
            minimum_columns: self.minimum_columns,
            minimum_rows: self.minimum_rows,
            required_columns: self.required_columns,
            required_rows: self.required_rows,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.framerate == 0 {
            return Err(ConfigError::Invalid("framerate must be at least 1".into()));
        }
        if self.minimum_columns == 0 || self.minimum_rows == 0 {
            return Err(ConfigError::Invalid(
                "minimum display size must be non-zero".into(),
            ));
        }
        if self.required_columns > self.minimum_columns || self.required_rows > self.minimum_rows {
            return Err(ConfigError::Invalid(format!(
                "required size {}x{} exceeds minimum size {}x{}",
                self.required_columns, self.required_rows, self.minimum_columns, self.minimum_rows
            )));
        }
        Ok(())
    }
}
