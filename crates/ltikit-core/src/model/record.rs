use crate::catalog::{AppType, ExtensionKind, PrivacyLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A declared substitutable variable with a default value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigOption {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub option_type: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl ConfigOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}

/// Alternate configuration URL offered alongside the primary one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigUrl {
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub url: String,
    pub height: u32,
}

/// Per-placement overrides of the record-level defaults
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtensionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ExtensionSettings {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Sanitized, stored representation of a configured tool
///
/// Only `RecordSanitizer` output (or records deserialized from a store that
/// it populated) should reach the derivation engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_type: Option<AppType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_level: Option<PrivacyLevel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<ExtensionKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doesnt_work: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub only_works: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub config_options: Vec<ConfigOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub config_urls: Vec<ConfigUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_directions: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extension_settings: BTreeMap<ExtensionKind, ExtensionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub no_launch: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub any_key: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub beta: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exclude_from_public_collections: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_json: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ims_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter_url: Option<String>,
}

impl ToolRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn declares(&self, kind: ExtensionKind) -> bool {
        self.extensions.contains(&kind)
    }

    /// Declared config options by name; a later declaration shadows an earlier one
    pub fn options_by_name(&self) -> BTreeMap<&str, &ConfigOption> {
        self.config_options
            .iter()
            .map(|o| (o.name.as_str(), o))
            .collect()
    }

    pub fn settings(&self, kind: ExtensionKind) -> Option<&ExtensionSettings> {
        self.extension_settings.get(&kind)
    }
}
