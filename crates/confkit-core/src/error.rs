//! Error handling for Confkit
//!
//! Provides structured error types for snapshot extraction, merge
//! reconciliation, and store persistence.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Confkit
///
/// Represents every failure the snapshot engine can surface: documents
/// that match neither snapshot shape, writes rejected by the settings
/// store, and file-level I/O or codec errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The document structurally matches neither snapshot shape.
    #[error("Invalid snapshot format: {0}")]
    InvalidFormat(String),

    /// A specific setting could not be created or updated.
    ///
    /// Processing stops at the failing setting; values written before it
    /// remain in the store.
    #[error("Failed to persist setting '{id}'")]
    PersistenceFailure {
        /// The id of the setting the store rejected.
        id: String,
    },

    /// The merge mode token is not one of the accepted values.
    #[error("Unknown merge mode '{0}' (expected full, create_only or replace_only)")]
    UnknownMergeMode(String),

    /// The store file extension is not a supported format.
    #[error("Unsupported store format: {0}")]
    UnsupportedFormat(String),

    /// The platform configuration directory could not be resolved.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl SettingsError {
    /// Create an `InvalidFormat` error from a message.
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        SettingsError::InvalidFormat(msg.into())
    }

    /// Check if this is a snapshot shape error.
    pub fn is_format_error(&self) -> bool {
        matches!(self, SettingsError::InvalidFormat(_))
    }

    /// Check if this is a store-level persistence failure.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, SettingsError::PersistenceFailure { .. })
    }
}

/// Result type using SettingsError
pub type Result<T> = std::result::Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SettingsError::InvalidFormat("top-level document is not an object".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid snapshot format: top-level document is not an object"
        );

        let err = SettingsError::PersistenceFailure {
            id: "site_title".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to persist setting 'site_title'");

        let err = SettingsError::UnknownMergeMode("merge".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown merge mode 'merge' (expected full, create_only or replace_only)"
        );

        let err = SettingsError::UnsupportedFormat("settings.yaml".to_string());
        assert_eq!(err.to_string(), "Unsupported store format: settings.yaml");
    }

    #[test]
    fn test_error_predicates() {
        let err = SettingsError::invalid_format("missing 'settings'");
        assert!(err.is_format_error());
        assert!(!err.is_persistence_failure());

        let err = SettingsError::PersistenceFailure {
            id: "a".to_string(),
        };
        assert!(err.is_persistence_failure());
        assert!(!err.is_format_error());
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SettingsError = io_err.into();
        assert!(matches!(err, SettingsError::Io(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SettingsError = json_err.into();
        assert!(matches!(err, SettingsError::Json(_)));
    }
}
