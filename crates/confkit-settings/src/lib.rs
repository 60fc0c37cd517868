//! Confkit Settings Crate
//!
//! Serializes a flat key-value settings store into simple or verbose JSON
//! snapshots and merges snapshot documents back into the store under a
//! conflict-resolution policy.

pub mod catalog;
pub mod export;
pub mod import;
pub mod persistence;
pub mod snapshot;
pub mod store;

pub use catalog::{SettingDefinition, SettingKind, SettingsCatalog, SettingsPage, SettingsSection};
pub use export::SnapshotExporter;
pub use import::{apply, extract, parse_document, MergePolicy};
pub use persistence::FileStore;
pub use snapshot::{FlatSettings, Snapshot, SnapshotPage, SnapshotSection, SnapshotSetting};
pub use store::{MemoryStore, SettingsStore};
