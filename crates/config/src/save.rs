//! Save file (`save.json`): profile, key bindings and user settings.
//!
//! A missing save file is created from the defaults, then read back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{KeyBindings, DEFAULT_INPUT_QUEUE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub exit: String,
    pub up: String,
    pub down: String,
    pub select: String,
}

impl Default for Controls {
    fn default() -> Self {
        let b = KeyBindings::default();
        Self {
            exit: b.exit,
            up: b.up,
            down: b.down,
            select: b.select,
        }
    }
}

impl From<&Controls> for KeyBindings {
    fn from(c: &Controls) -> Self {
        KeyBindings {
            exit: c.exit.clone(),
            up: c.up.clone(),
            down: c.down.clone(),
            select: c.select.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    /// Pending input events kept between ticks.
    pub input_queue: usize,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            input_queue: DEFAULT_INPUT_QUEUE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Save {
    /// Empty when no profile has been created yet.
    pub username: String,
    pub controls: Controls,
    pub settings: UserSettings,
}

impl Save {
    /// Profile name, if one exists.
    pub fn profile(&self) -> Option<&str> {
        let name = self.username.trim();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    pub fn bindings(&self) -> KeyBindings {
        KeyBindings::from(&self.controls)
    }

    /// Read the save file, writing a default one first if it does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "save file not found, generating one");
            let text = serde_json::to_string_pretty(&Save::default())
                .map_err(|e| ConfigError::parse(path, e))?;
            std::fs::write(path, text).map_err(|e| ConfigError::io(path, e))?;
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| ConfigError::parse(path, e))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.controls;
        for (control, key) in [
            ("exit", &c.exit),
            ("up", &c.up),
            ("down", &c.down),
            ("select", &c.select),
        ] {
            if key.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "no key bound to `{control}`"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_save_layout() {
        let s: Save = serde_json::from_str(
            r#"{"username":"ada","controls":{"exit":"q","up":"k","down":"j","select":"space"},"settings":{"inputQueue":2}}"#,
        )
        .unwrap();
        assert_eq!(s.profile(), Some("ada"));
        assert_eq!(s.bindings().exit, "q");
        assert_eq!(s.bindings().select, "space");
        assert_eq!(s.settings.input_queue, 2);
    }

    #[test]
    fn blank_username_means_no_profile() {
        let s = Save {
            username: "   ".into(),
            ..Save::default()
        };
        assert_eq!(s.profile(), None);
        assert_eq!(Save::default().profile(), None);
    }

    #[test]
    fn partial_controls_keep_defaults() {
        let s: Save = serde_json::from_str(r#"{"controls":{"exit":"q"}}"#).unwrap();
        assert_eq!(s.controls.exit, "q");
        assert_eq!(s.controls.select, "return");
        assert_eq!(s.settings.input_queue, DEFAULT_INPUT_QUEUE);
    }

    #[test]
    fn empty_binding_is_invalid() {
        let mut s = Save::default();
        s.controls.up.clear();
        assert!(matches!(s.validate(), Err(ConfigError::Invalid(_))));
    }
}
