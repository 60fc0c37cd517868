//! Settings catalog model
//!
//! Describes the settings available to the engine, grouped into pages and
//! sections. The catalog supplies the structure walked during export; it
//! never holds live values, those live in the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of a setting definition
///
/// Data kinds carry a stored value; structural kinds are layout markers
/// and are excluded from both snapshot shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKind {
    /// Free-form text
    Text,
    /// Numeric value
    Number,
    /// On/off switch
    Toggle,
    /// One value from a fixed option list
    Select,
    /// Color value
    Color,
    /// Section heading marker, no stored value
    Heading,
    /// Inline HTML block marker, no stored value
    Html,
}

impl SettingKind {
    /// Get all setting kinds
    pub fn all() -> &'static [SettingKind] {
        &[
            SettingKind::Text,
            SettingKind::Number,
            SettingKind::Toggle,
            SettingKind::Select,
            SettingKind::Color,
            SettingKind::Heading,
            SettingKind::Html,
        ]
    }

    /// Check if this kind is a layout marker without a stored value
    pub fn is_structural(&self) -> bool {
        matches!(self, SettingKind::Heading | SettingKind::Html)
    }
}

impl std::fmt::Display for SettingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Number => write!(f, "number"),
            Self::Toggle => write!(f, "toggle"),
            Self::Select => write!(f, "select"),
            Self::Color => write!(f, "color"),
            Self::Heading => write!(f, "heading"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// A single setting definition
///
/// Immutable during one export pass. Definitions with an empty id or of a
/// structural kind are skipped by both exporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingDefinition {
    /// Store key for this setting
    pub id: String,
    /// Human-readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Longer help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Kind of setting
    pub kind: SettingKind,
    /// Default value when the store has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl SettingDefinition {
    /// Create a new definition with the given id and kind
    pub fn new(id: impl Into<String>, kind: SettingKind) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            kind,
            default: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default value
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Check if this definition appears in snapshots
    pub fn is_exported(&self) -> bool {
        !self.id.is_empty() && !self.kind.is_structural()
    }
}

/// An ordered group of setting definitions within a page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsSection {
    /// Section id
    pub id: String,
    /// Section title
    pub title: String,
    /// Definitions in catalog order
    pub settings: Vec<SettingDefinition>,
}

impl SettingsSection {
    /// Create a new empty section
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            settings: Vec::new(),
        }
    }

    /// Add a setting definition to this section
    pub fn add_setting(&mut self, setting: SettingDefinition) {
        self.settings.push(setting);
    }

    /// Add a setting definition, builder style
    pub fn with_setting(mut self, setting: SettingDefinition) -> Self {
        self.settings.push(setting);
        self
    }
}

/// An ordered group of sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsPage {
    /// Page id
    pub id: String,
    /// Page label
    pub label: String,
    /// Sections in catalog order
    pub sections: Vec<SettingsSection>,
}

impl SettingsPage {
    /// Create a new empty page
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sections: Vec::new(),
        }
    }

    /// Add a section to this page
    pub fn add_section(&mut self, section: SettingsSection) {
        self.sections.push(section);
    }

    /// Add a section, builder style
    pub fn with_section(mut self, section: SettingsSection) -> Self {
        self.sections.push(section);
        self
    }
}

/// The full settings catalog: ordered pages of sections of definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsCatalog {
    /// Pages in display order
    pub pages: Vec<SettingsPage>,
}

impl SettingsCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page to the catalog
    pub fn add_page(&mut self, page: SettingsPage) {
        self.pages.push(page);
    }

    /// Add a page, builder style
    pub fn with_page(mut self, page: SettingsPage) -> Self {
        self.pages.push(page);
        self
    }

    /// Iterate over every definition across all pages and sections
    pub fn definitions(&self) -> impl Iterator<Item = &SettingDefinition> {
        self.pages
            .iter()
            .flat_map(|p| p.sections.iter())
            .flat_map(|s| s.settings.iter())
    }
}
