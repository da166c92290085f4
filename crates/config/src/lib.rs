//! Configuration module - presets, save file and text assets
//!
//! Everything is read once at startup from one directory:
//!
//! ```text
//! $TERMSTAGE_HOME/
//!   presets.json   display limits and framerate (optional)
//!   save.json      profile, key bindings, input queue size (created if missing)
//!   assets/        text blocks keyed by file stem (optional)
//! ```
//!
//! # Environment Variables
//!
//! - `TERMSTAGE_HOME`: configuration directory (default: current directory)

use std::path::{Path, PathBuf};

pub mod assets;
pub mod error;
pub mod presets;
pub mod save;

pub use termstage_types as types;

pub use assets::Assets;
pub use error::ConfigError;
pub use presets::Presets;
pub use save::{Controls, Save, UserSettings};

pub const PRESETS_FILE: &str = "presets.json";
pub const SAVE_FILE: &str = "save.json";
pub const ASSETS_DIR: &str = "assets";

/// Everything loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub presets: Presets,
    pub save: Save,
    pub assets: Assets,
}

impl Config {
    /// Configuration directory from `TERMSTAGE_HOME`, or the current directory.
    pub fn home_from_env() -> PathBuf {
        std::env::var("TERMSTAGE_HOME")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn load_from_env() -> Result<Self, ConfigError> {
        Self::load(&Self::home_from_env())
    }

    /// Load and validate the configuration in `dir`.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let presets = Presets::load_or_default(&dir.join(PRESETS_FILE))?;
        let save = Save::load_or_create(&dir.join(SAVE_FILE))?;
        let assets = Assets::load(&dir.join(ASSETS_DIR))?;
        let config = Self {
            presets,
            save,
            assets,
        };
        config.validate()?;
        tracing::info!(
            dir = %dir.display(),
            framerate = config.presets.framerate,
            assets = config.assets.names().count(),
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.presets.validate()?;
        self.save.validate()?;
        self.assets.require(assets::TITLE)?;
        Ok(())
    }
}
