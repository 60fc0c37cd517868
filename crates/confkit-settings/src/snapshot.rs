//! Snapshot document shapes
//!
//! The simple shape is a flat id-to-value map; the verbose shape keeps the
//! catalog nesting and carries definition metadata next to each live value.

use crate::catalog::SettingKind;
use confkit_core::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Flat id-to-value map, the canonical merge unit
///
/// Both snapshot shapes collapse to this before apply. Constructed fresh
/// per import and discarded afterwards.
pub type FlatSettings = Map<String, Value>;

/// A serialized point-in-time view of all settings
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Snapshot {
    /// Flat shape: `{ "settings": { id: value } }`
    Simple {
        /// Exported values keyed by setting id
        settings: FlatSettings,
    },
    /// Nested self-describing shape: `{ "pages": [ ... ] }`
    Verbose {
        /// Exported pages; every page has at least one section and every
        /// section at least one setting
        pages: Vec<SnapshotPage>,
    },
}

impl Snapshot {
    /// Serialize to a JSON string, indented when `pretty` is set
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }

    /// Serialize to a JSON value
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// One page of a verbose snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotPage {
    /// Page id
    pub id: String,
    /// Page label
    pub label: String,
    /// Sections with at least one exported setting
    pub sections: Vec<SnapshotSection>,
}

/// One section of a verbose snapshot page
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotSection {
    /// Section id
    pub id: String,
    /// Section title
    pub title: String,
    /// Exported settings in catalog order
    pub settings: Vec<SnapshotSetting>,
}

/// One setting entry of a verbose snapshot
///
/// Metadata fields are emitted only when the definition carries them.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotSetting {
    /// Setting id
    pub id: String,
    /// Definition title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Definition description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Definition kind
    #[serde(rename = "type")]
    pub kind: SettingKind,
    /// Definition default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Live value at export time, `null` when absent from the store
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_shape() {
        let mut settings = FlatSettings::new();
        settings.insert("a".to_string(), json!(1));
        let snapshot = Snapshot::Simple { settings };

        let value = snapshot.to_value().unwrap();
        assert_eq!(value, json!({"settings": {"a": 1}}));
    }

    #[test]
    fn test_verbose_shape_omits_absent_metadata() {
        let snapshot = Snapshot::Verbose {
            pages: vec![SnapshotPage {
                id: "general".to_string(),
                label: "General".to_string(),
                sections: vec![SnapshotSection {
                    id: "identity".to_string(),
                    title: "Identity".to_string(),
                    settings: vec![SnapshotSetting {
                        id: "site_title".to_string(),
                        title: None,
                        description: None,
                        kind: SettingKind::Text,
                        default: None,
                        value: json!("My Site"),
                    }],
                }],
            }],
        };

        let value = snapshot.to_value().unwrap();
        let entry = &value["pages"][0]["sections"][0]["settings"][0];
        assert_eq!(entry["id"], json!("site_title"));
        assert_eq!(entry["type"], json!("text"));
        assert_eq!(entry["value"], json!("My Site"));
        assert!(entry.get("title").is_none());
        assert!(entry.get("default").is_none());
    }

    #[test]
    fn test_pretty_flag() {
        let snapshot = Snapshot::Simple {
            settings: FlatSettings::new(),
        };
        let compact = snapshot.to_json(false).unwrap();
        let pretty = snapshot.to_json(true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
    }
}
