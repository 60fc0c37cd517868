//! Settings store contract
//!
//! Key-value capability interface the engine reads during export and
//! writes during import. Boolean returns signal persistence success;
//! implementations do not panic and carry no error type at this seam.

use serde_json::Value;
use std::collections::BTreeMap;

/// Key-value store for live setting values
pub trait SettingsStore {
    /// Read the current value for an id, `None` when absent
    fn get(&self, id: &str) -> Option<Value>;

    /// Create a value under an id that does not exist yet
    ///
    /// Returns `false` when the write was rejected, including when the id
    /// already exists.
    fn create(&mut self, id: &str, value: Value) -> bool;

    /// Replace the value under an id
    ///
    /// Returns `false` when the write was rejected.
    fn update(&mut self, id: &str, value: Value) -> bool;
}

/// In-memory settings store backed by a `BTreeMap`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored settings
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the stored values
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }
}

impl From<BTreeMap<String, Value>> for MemoryStore {
    fn from(values: BTreeMap<String, Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<(String, Value)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, id: &str) -> Option<Value> {
        self.values.get(id).cloned()
    }

    fn create(&mut self, id: &str, value: Value) -> bool {
        if self.values.contains_key(id) {
            return false;
        }
        self.values.insert(id.to_string(), value);
        true
    }

    fn update(&mut self, id: &str, value: Value) -> bool {
        self.values.insert(id.to_string(), value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_rejects_existing_id() {
        let mut store = MemoryStore::new();
        assert!(store.create("theme", json!("dark")));
        assert!(!store.create("theme", json!("light")));
        assert_eq!(store.get("theme"), Some(json!("dark")));
    }

    #[test]
    fn test_update_replaces_value() {
        let mut store = MemoryStore::from_iter([("theme".to_string(), json!("dark"))]);
        assert!(store.update("theme", json!("light")));
        assert_eq!(store.get("theme"), Some(json!("light")));
    }

    #[test]
    fn test_get_absent() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);
        assert!(store.is_empty());
    }
}
