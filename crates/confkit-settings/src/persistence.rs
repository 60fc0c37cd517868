//! File-backed settings store
//!
//! Persists the key-value store to a JSON or TOML file, selected by
//! extension, stored in the platform configuration directory by default.

use crate::store::{MemoryStore, SettingsStore};
use confkit_core::{Result, SettingsError};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings store persisted to a JSON or TOML file
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    values: MemoryStore,
}

impl FileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let values: BTreeMap<String, Value> = if path.extension().is_some_and(|ext| ext == "json")
        {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat(path.display().to_string()));
        };

        debug!(path = %path.display(), count = values.len(), "loaded settings store");
        Ok(Self {
            values: MemoryStore::from(values),
        })
    }

    /// Save the store to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self.values.values())?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self.values.values())?
        } else {
            return Err(SettingsError::UnsupportedFormat(path.display().to_string()));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "saved settings store");
        Ok(())
    }

    /// Default store file under the platform configuration directory
    pub fn default_store_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("confkit").join("settings.json"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Number of stored settings
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for FileStore {
    fn get(&self, id: &str) -> Option<Value> {
        self.values.get(id)
    }

    fn create(&mut self, id: &str, value: Value) -> bool {
        self.values.create(id, value)
    }

    fn update(&mut self, id: &str, value: Value) -> bool {
        self.values.update(id, value)
    }
}
