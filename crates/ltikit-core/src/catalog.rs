//! Closed value sets accepted from submitted tool forms.
//!
//! Membership is always checked by set intersection against these tables so
//! the literals live in exactly one place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub const CATEGORIES: &[&str] = &[
    "Assessment",
    "Community",
    "Completely Free",
    "Content",
    "Math",
    "Media",
    "Open Content",
    "Science",
    "Study Helps",
    "Textbooks/eBooks",
    "Web 2.0",
];

pub const LEVELS: &[&str] = &["K-6th Grade", "7th-12th Grade", "Postsecondary"];

pub const PRIVACY_LEVELS: &[&str] = &["public", "name_only", "email_only", "anonymous"];

/// Sugar app types that expand into fixed configuration blocks
pub const APP_TYPES: &[&str] = &["open_launch", "data"];

/// Platform identifier whose extension block is hoisted onto the descriptor
pub const RESERVED_PLATFORM: &str = "canvas.instructure.com";

/// Namespace URI of basic-tool-interop elements
pub const BLTI_NAMESPACE: &str = "http://www.imsglobal.org/xsd/imsbasiclti_v1p0";

/// Keep the submitted values that appear in `allowed`, in submission order,
/// without duplicates.
pub fn intersect<S: AsRef<str>>(submitted: &[S], allowed: &[&str]) -> Vec<String> {
    let allowed: BTreeSet<&str> = allowed.iter().copied().collect();
    let mut seen = BTreeSet::new();
    submitted
        .iter()
        .map(AsRef::as_ref)
        .filter(|v| allowed.contains(v) && seen.insert(v.to_string()))
        .map(str::to_string)
        .collect()
}

/// The six placements a tool may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionKind {
    CourseNav,
    UserNav,
    AccountNav,
    EditorButton,
    ResourceSelection,
    HomeworkSubmission,
}

impl ExtensionKind {
    pub const ALL: [ExtensionKind; 6] = [
        ExtensionKind::CourseNav,
        ExtensionKind::UserNav,
        ExtensionKind::AccountNav,
        ExtensionKind::EditorButton,
        ExtensionKind::ResourceSelection,
        ExtensionKind::HomeworkSubmission,
    ];

    /// Record/form key, also the name of the gating config option
    pub fn key(&self) -> &'static str {
        match self {
            ExtensionKind::CourseNav => "course_nav",
            ExtensionKind::UserNav => "user_nav",
            ExtensionKind::AccountNav => "account_nav",
            ExtensionKind::EditorButton => "editor_button",
            ExtensionKind::ResourceSelection => "resource_selection",
            ExtensionKind::HomeworkSubmission => "homework_submission",
        }
    }

    /// Name of the placement block in descriptor settings and launch output
    pub fn placement_name(&self) -> &'static str {
        match self {
            ExtensionKind::CourseNav => "course_navigation",
            ExtensionKind::UserNav => "user_navigation",
            ExtensionKind::AccountNav => "account_navigation",
            ExtensionKind::EditorButton => "editor_button",
            ExtensionKind::ResourceSelection => "resource_selection",
            ExtensionKind::HomeworkSubmission => "homework_submission",
        }
    }

    /// Placements that open in a sized dialog and carry their own icon
    pub fn is_dialog(&self) -> bool {
        matches!(
            self,
            ExtensionKind::EditorButton
                | ExtensionKind::ResourceSelection
                | ExtensionKind::HomeworkSubmission
        )
    }

    pub fn from_placement_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.placement_name() == name)
    }
}

impl FromStr for ExtensionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| format!("unknown extension: {}", s))
    }
}

impl fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How much user identity a launch shares with the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacyLevel {
    Public,
    NameOnly,
    EmailOnly,
    #[default]
    Anonymous,
}

impl PrivacyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrivacyLevel::Public => "public",
            PrivacyLevel::NameOnly => "name_only",
            PrivacyLevel::EmailOnly => "email_only",
            PrivacyLevel::Anonymous => "anonymous",
        }
    }
}

impl FromStr for PrivacyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(PrivacyLevel::Public),
            "name_only" => Ok(PrivacyLevel::NameOnly),
            "email_only" => Ok(PrivacyLevel::EmailOnly),
            "anonymous" => Ok(PrivacyLevel::Anonymous),
            other => Err(format!("unknown privacy level: {}", other)),
        }
    }
}

/// Declared tool type; `OpenLaunch` and `Data` are sugar types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AppType {
    OpenLaunch,
    Data,
    Custom,
    Other(String),
}

impl AppType {
    pub fn as_str(&self) -> &str {
        match self {
            AppType::OpenLaunch => "open_launch",
            AppType::Data => "data",
            AppType::Custom => "custom",
            AppType::Other(s) => s,
        }
    }

    pub fn is_sugar(&self) -> bool {
        matches!(self, AppType::OpenLaunch | AppType::Data)
    }
}

impl From<String> for AppType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "open_launch" => AppType::OpenLaunch,
            "data" => AppType::Data,
            "custom" => AppType::Custom,
            _ => AppType::Other(s),
        }
    }
}

impl From<AppType> for String {
    fn from(t: AppType) -> Self {
        t.as_str().to_string()
    }
}
