//! Expansion of the `open_launch` and `data` sugar app types.

use crate::catalog::{ExtensionKind, PrivacyLevel};
use crate::model::{LaunchConfiguration, Placement, ToolRecord};

pub const DEFAULT_DIALOG_WIDTH: u32 = 690;
pub const DEFAULT_DIALOG_HEIGHT: u32 = 530;

/// Placements a sugar type can synthesize
const SUGAR_PLACEMENTS: [ExtensionKind; 2] =
    [ExtensionKind::EditorButton, ExtensionKind::ResourceSelection];

pub fn redirect_url(host: &str, id: &str) -> String {
    format!("{}/tool_redirect?id={}", host, id)
}

pub fn default_icon_url(host: &str, id: &str) -> String {
    format!("{}/tools/{}/icon.png", host, id)
}

fn synthesize_urls(config: &mut LaunchConfiguration, host: &str) -> (String, String) {
    let launch_url = redirect_url(host, &config.id);
    let icon_url = default_icon_url(host, &config.id);
    config.privacy_level = PrivacyLevel::Anonymous;
    config.launch_url = Some(launch_url.clone());
    config.icon_url = Some(icon_url.clone());
    (launch_url, icon_url)
}

/// Link text is the record's raw name, never substituted.
fn dialog_placement(record: &ToolRecord, launch_url: &str, icon_url: &str) -> Placement {
    Placement {
        launch_url: launch_url.to_string(),
        link_text: record.name.clone(),
        visibility: None,
        default: None,
        icon_url: Some(icon_url.to_string()),
        width: Some(record.width.unwrap_or(DEFAULT_DIALOG_WIDTH)),
        height: Some(record.height.unwrap_or(DEFAULT_DIALOG_HEIGHT)),
    }
}

/// Redirect-based launch; dialog placements only where the record declares them.
pub fn apply_open_launch(config: &mut LaunchConfiguration, record: &ToolRecord, host: &str) {
    let (launch_url, icon_url) = synthesize_urls(config, host);
    for kind in SUGAR_PLACEMENTS {
        if record.declares(kind) {
            config.set_placement(kind, dialog_placement(record, &launch_url, &icon_url));
        }
    }
}

/// Data tools always expose both dialog placements; `no_launch` drops the
/// top-level launch URL but not the placements' URLs.
pub fn apply_data_launch(config: &mut LaunchConfiguration, record: &ToolRecord, host: &str) {
    let (launch_url, icon_url) = synthesize_urls(config, host);
    for kind in SUGAR_PLACEMENTS {
        config.set_placement(kind, dialog_placement(record, &launch_url, &icon_url));
    }
    if record.no_launch {
        config.launch_url = None;
    }
}
