use crate::catalog::{ExtensionKind, PrivacyLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One navigation/placement block of a launch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub launch_url: String,
    pub link_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Fully derived description of how a consuming platform embeds a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfiguration {
    pub name: String,
    pub description: String,
    pub privacy_level: PrivacyLevel,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Serialized as `null` when a data tool suppresses its launch
    #[serde(default)]
    pub launch_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_navigation: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_navigation: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_navigation: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_button: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_selection: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homework_submission: Option<Placement>,
}

impl LaunchConfiguration {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            privacy_level: PrivacyLevel::Anonymous,
            id: id.into(),
            icon_url: None,
            launch_url: None,
            domain: None,
            custom_fields: None,
            course_navigation: None,
            user_navigation: None,
            account_navigation: None,
            editor_button: None,
            resource_selection: None,
            homework_submission: None,
        }
    }

    fn slot(&self, kind: ExtensionKind) -> &Option<Placement> {
        match kind {
            ExtensionKind::CourseNav => &self.course_navigation,
            ExtensionKind::UserNav => &self.user_navigation,
            ExtensionKind::AccountNav => &self.account_navigation,
            ExtensionKind::EditorButton => &self.editor_button,
            ExtensionKind::ResourceSelection => &self.resource_selection,
            ExtensionKind::HomeworkSubmission => &self.homework_submission,
        }
    }

    fn slot_mut(&mut self, kind: ExtensionKind) -> &mut Option<Placement> {
        match kind {
            ExtensionKind::CourseNav => &mut self.course_navigation,
            ExtensionKind::UserNav => &mut self.user_navigation,
            ExtensionKind::AccountNav => &mut self.account_navigation,
            ExtensionKind::EditorButton => &mut self.editor_button,
            ExtensionKind::ResourceSelection => &mut self.resource_selection,
            ExtensionKind::HomeworkSubmission => &mut self.homework_submission,
        }
    }

    pub fn placement(&self, kind: ExtensionKind) -> Option<&Placement> {
        self.slot(kind).as_ref()
    }

    pub fn set_placement(&mut self, kind: ExtensionKind, placement: Placement) {
        *self.slot_mut(kind) = Some(placement);
    }

    /// Emitted placements in fixed extension order
    pub fn placements(&self) -> impl Iterator<Item = (ExtensionKind, &Placement)> {
        ExtensionKind::ALL
            .into_iter()
            .filter_map(move |k| self.placement(k).map(|p| (k, p)))
    }
}
