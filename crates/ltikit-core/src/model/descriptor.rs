use crate::model::CustomFieldMap;
use ltikit_core_types::Sensitive;
use serde::{Deserialize, Serialize};

/// Platform-specific configuration fragment carried through unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionBlock {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub custom_fields: CustomFieldMap,
}

/// Canonical description of a tool cartridge, produced once per XML parse
///
/// Fields promoted out of the reserved platform's extension block
/// (`privacy_level`, `domain`, credentials, `tool_id`, outcome) live directly
/// on the descriptor; whatever else that block declared is `platform_settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_url: Option<String>,
    #[serde(default)]
    pub custom_fields: CustomFieldMap,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<ExtensionBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_settings: Option<CustomFieldMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_secret: Option<Sensitive<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_points_possible: Option<f64>,
}

impl ToolDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            launch_url: None,
            custom_fields: CustomFieldMap::new(),
            extensions: Vec::new(),
            platform_settings: None,
            privacy_level: None,
            domain: None,
            consumer_key: None,
            shared_secret: None,
            tool_id: None,
            assignment_points_possible: None,
        }
    }

    /// Icon recorded from the top-level `icon` element
    pub fn icon_url(&self) -> Option<&str> {
        self.platform_settings
            .as_ref()
            .and_then(|s| s.text("icon_url"))
    }

    /// Extension block for a given platform, if one was kept
    pub fn extension(&self, platform: &str) -> Option<&ExtensionBlock> {
        self.extensions.iter().find(|e| e.platform == platform)
    }
}
