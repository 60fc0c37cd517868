//! Snapshot export
//!
//! Walks the catalog in order, reads live values from the store, and
//! produces either snapshot shape. Pure read of catalog and store, no
//! side effects.

use crate::catalog::SettingsCatalog;
use crate::snapshot::{FlatSettings, Snapshot, SnapshotPage, SnapshotSection, SnapshotSetting};
use crate::store::SettingsStore;
use serde_json::Value;
use tracing::debug;

/// Snapshot producer over a catalog and a live store
pub struct SnapshotExporter<'a> {
    catalog: &'a SettingsCatalog,
    store: &'a dyn SettingsStore,
}

impl<'a> SnapshotExporter<'a> {
    /// Create an exporter borrowing the catalog and store
    pub fn new(catalog: &'a SettingsCatalog, store: &'a dyn SettingsStore) -> Self {
        Self { catalog, store }
    }

    /// Export the flat shape: id to current value, in catalog order
    ///
    /// Empty-id and structural definitions are skipped; ids absent from
    /// the store are recorded as `null`.
    pub fn export_simple(&self) -> Snapshot {
        let mut settings = FlatSettings::new();
        for page in &self.catalog.pages {
            for section in &page.sections {
                for def in &section.settings {
                    if !def.is_exported() {
                        continue;
                    }
                    let value = self.store.get(&def.id).unwrap_or(Value::Null);
                    settings.insert(def.id.clone(), value);
                }
            }
        }
        debug!(count = settings.len(), "exported simple snapshot");
        Snapshot::Simple { settings }
    }

    /// Export the nested self-describing shape
    ///
    /// Same traversal as [`export_simple`](Self::export_simple) but keeps
    /// the page/section nesting and copies whichever metadata fields the
    /// definition carries plus the live value. Sections and pages left
    /// with no settings are pruned from the output.
    pub fn export_verbose(&self) -> Snapshot {
        let mut pages = Vec::new();
        for page in &self.catalog.pages {
            let mut sections = Vec::new();
            for section in &page.sections {
                let settings: Vec<SnapshotSetting> = section
                    .settings
                    .iter()
                    .filter(|def| def.is_exported())
                    .map(|def| SnapshotSetting {
                        id: def.id.clone(),
                        title: def.title.clone(),
                        description: def.description.clone(),
                        kind: def.kind,
                        default: def.default.clone(),
                        value: self.store.get(&def.id).unwrap_or(Value::Null),
                    })
                    .collect();
                if settings.is_empty() {
                    continue;
                }
                sections.push(SnapshotSection {
                    id: section.id.clone(),
                    title: section.title.clone(),
                    settings,
                });
            }
            if sections.is_empty() {
                continue;
            }
            pages.push(SnapshotPage {
                id: page.id.clone(),
                label: page.label.clone(),
                sections,
            });
        }
        debug!(pages = pages.len(), "exported verbose snapshot");
        Snapshot::Verbose { pages }
    }
}
