//! Snapshot import
//!
//! Detects which snapshot shape a document carries, collapses it to a
//! flat id-to-value map, and applies that map to a settings store under
//! a merge policy.

use crate::snapshot::FlatSettings;
use crate::store::SettingsStore;
use confkit_core::{Result, SettingsError};
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, warn};

/// Rule governing which pairs of an import are written to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Create missing settings and replace differing ones
    Full,
    /// Only create settings absent from the store
    CreateOnly,
    /// Only replace settings already in the store
    ReplaceOnly,
}

impl FromStr for MergePolicy {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "full" => Ok(MergePolicy::Full),
            "create_only" => Ok(MergePolicy::CreateOnly),
            "replace_only" => Ok(MergePolicy::ReplaceOnly),
            other => Err(SettingsError::UnknownMergeMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::CreateOnly => write!(f, "create_only"),
            Self::ReplaceOnly => write!(f, "replace_only"),
        }
    }
}

/// Parse a JSON document and extract its flat settings map
///
/// Malformed JSON surfaces as [`SettingsError::Json`]; a well-formed
/// document matching neither snapshot shape as
/// [`SettingsError::InvalidFormat`].
pub fn parse_document(text: &str) -> Result<FlatSettings> {
    let document: Value = serde_json::from_str(text)?;
    extract(&document)
}

/// Extract the flat settings map from a parsed document of either shape
///
/// A `"pages"` member marks the verbose shape; otherwise the `"settings"`
/// member must hold an object. A document with neither member fails
/// closed with [`SettingsError::InvalidFormat`].
pub fn extract(document: &Value) -> Result<FlatSettings> {
    let root = document
        .as_object()
        .ok_or_else(|| SettingsError::invalid_format("top-level document is not an object"))?;

    if let Some(pages) = root.get("pages") {
        return extract_verbose(pages);
    }

    match root.get("settings") {
        Some(Value::Object(settings)) => Ok(settings.clone()),
        Some(_) => Err(SettingsError::invalid_format(
            "'settings' member is not an object",
        )),
        None => Err(SettingsError::invalid_format(
            "document has neither a 'pages' nor a 'settings' member",
        )),
    }
}

/// Flatten a verbose `pages` value into one settings map
///
/// Validation fails closed: any page without a `sections` array, section
/// without a `settings` array, or entry without a string `id` and a
/// `value` member rejects the whole document, never a partial map. Later
/// duplicate ids overwrite earlier ones in traversal order.
fn extract_verbose(pages: &Value) -> Result<FlatSettings> {
    let pages = pages
        .as_array()
        .ok_or_else(|| SettingsError::invalid_format("'pages' is not an array"))?;

    let mut flat = FlatSettings::new();
    for page in pages {
        let sections = page
            .get("sections")
            .and_then(Value::as_array)
            .ok_or_else(|| SettingsError::invalid_format("page without a 'sections' array"))?;
        for section in sections {
            let settings = section
                .get("settings")
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    SettingsError::invalid_format("section without a 'settings' array")
                })?;
            for entry in settings {
                let id = entry.get("id").and_then(Value::as_str).ok_or_else(|| {
                    SettingsError::invalid_format("setting entry without a string 'id'")
                })?;
                let value = entry.get("value").ok_or_else(|| {
                    SettingsError::invalid_format(format!("setting '{}' has no 'value'", id))
                })?;
                flat.insert(id.to_string(), value.clone());
            }
        }
    }
    Ok(flat)
}

/// Apply a flat settings map to the store under a merge policy
///
/// Pairs are processed in map iteration order: the policy filters on
/// whether the id is already present, absent ids are created, differing
/// values updated, equal values skipped without counting. The first write
/// the store rejects aborts the import with
/// [`SettingsError::PersistenceFailure`]; values written before it stay
/// in place. Returns the number of settings written, zero being a valid
/// outcome.
pub fn apply(
    store: &mut dyn SettingsStore,
    settings: &FlatSettings,
    policy: MergePolicy,
) -> Result<usize> {
    let mut applied = 0;
    for (id, value) in settings {
        let previous = store.get(id);

        match policy {
            MergePolicy::CreateOnly if previous.is_some() => {
                debug!(%id, "existing setting skipped by create_only");
                continue;
            }
            MergePolicy::ReplaceOnly if previous.is_none() => {
                debug!(%id, "missing setting skipped by replace_only");
                continue;
            }
            _ => {}
        }

        let written = match previous {
            None => store.create(id, value.clone()),
            Some(ref prev) if prev != value => store.update(id, value.clone()),
            Some(_) => {
                debug!(%id, "value unchanged, skipped");
                continue;
            }
        };

        if !written {
            warn!(%id, "store rejected write, aborting import");
            return Err(SettingsError::PersistenceFailure { id: id.clone() });
        }
        applied += 1;
    }
    debug!(applied, %policy, "import applied");
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_policy_tokens() {
        assert_eq!("full".parse::<MergePolicy>().unwrap(), MergePolicy::Full);
        assert_eq!(
            "create_only".parse::<MergePolicy>().unwrap(),
            MergePolicy::CreateOnly
        );
        assert_eq!(
            "replace_only".parse::<MergePolicy>().unwrap(),
            MergePolicy::ReplaceOnly
        );
        assert!(matches!(
            "merge".parse::<MergePolicy>(),
            Err(SettingsError::UnknownMergeMode(_))
        ));
        assert_eq!(MergePolicy::CreateOnly.to_string(), "create_only");
    }

    #[test]
    fn test_extract_simple() {
        let flat = extract(&json!({"settings": {"a": 1, "b": "two"}})).unwrap();
        assert_eq!(flat.get("a"), Some(&json!(1)));
        assert_eq!(flat.get("b"), Some(&json!("two")));
    }

    #[test]
    fn test_extract_rejects_non_object_root() {
        assert!(extract(&json!([1, 2])).unwrap_err().is_format_error());
        assert!(extract(&json!("settings")).unwrap_err().is_format_error());
    }

    #[test]
    fn test_extract_rejects_unknown_shape() {
        let err = extract(&json!({"foo": 1})).unwrap_err();
        assert!(err.is_format_error());

        let err = extract(&json!({"settings": [1]})).unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_extract_verbose_duplicates_last_write_wins() {
        let doc = json!({"pages": [
            {"sections": [
                {"settings": [
                    {"id": "a", "value": 1},
                    {"id": "a", "value": 2}
                ]}
            ]}
        ]});
        let flat = extract(&doc).unwrap();
        assert_eq!(flat.get("a"), Some(&json!(2)));
    }

    #[test]
    fn test_extract_verbose_rejects_missing_pieces() {
        let no_sections = json!({"pages": [{"id": "p"}]});
        assert!(extract(&no_sections).unwrap_err().is_format_error());

        let no_settings = json!({"pages": [{"sections": [{"id": "s"}]}]});
        assert!(extract(&no_settings).unwrap_err().is_format_error());

        let no_id = json!({"pages": [{"sections": [{"settings": [{"value": 1}]}]}]});
        assert!(extract(&no_id).unwrap_err().is_format_error());

        let no_value = json!({"pages": [{"sections": [{"settings": [{"id": "a"}]}]}]});
        assert!(extract(&no_value).unwrap_err().is_format_error());
    }

    #[test]
    fn test_parse_document_malformed_json() {
        assert!(matches!(
            parse_document("{not json"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_apply_equal_value_not_counted() {
        let mut store = MemoryStore::from_iter([("a".to_string(), json!(1))]);
        let flat = extract(&json!({"settings": {"a": 1}})).unwrap();
        assert_eq!(apply(&mut store, &flat, MergePolicy::Full).unwrap(), 0);
    }

    #[test]
    fn test_apply_empty_map_is_zero_not_error() {
        let mut store = MemoryStore::new();
        let flat = FlatSettings::new();
        assert_eq!(apply(&mut store, &flat, MergePolicy::Full).unwrap(), 0);
    }
}
