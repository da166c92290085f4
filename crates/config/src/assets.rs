//! Text assets: every file in the assets directory, keyed by file stem.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

pub const TITLE: &str = "title";

const BUILTIN_TITLE: &str = include_str!("../assets/title.txt");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    entries: BTreeMap<String, String>,
}

impl Default for Assets {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(TITLE.to_string(), BUILTIN_TITLE.to_string());
        Self { entries }
    }
}

impl Assets {
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Load all files under `dir` on top of the built-in assets.
    ///
    /// `title.txt` becomes `title`; `banner.v2.txt` becomes `banner.v2`.
    /// A missing directory leaves only the built-ins.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut assets = Self::default();
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "no assets directory, using built-in assets");
            return Ok(assets);
        }

        let read_dir = std::fs::read_dir(dir).map_err(|e| ConfigError::io(dir, e))?;
        for entry in read_dir {
            let entry = entry.map_err(|e| ConfigError::io(dir, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::io(&path, e))?;
            tracing::debug!(asset = stem, "loaded asset");
            assets.entries.insert(stem.to_string(), text);
        }
        Ok(assets)
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(name.into(), text.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn require(&self, name: &str) -> Result<&str, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::MissingAsset(name.to_string()))
    }

    pub fn title(&self) -> &str {
        self.get(TITLE).unwrap_or(BUILTIN_TITLE)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
