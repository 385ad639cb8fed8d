//! Descriptor → record adapter.
//!
//! Pre-populates a [`ToolRecord`] from a fetched cartridge. The result is a
//! starting point for a submission, not a sanitized record: callers that
//! persist it should still run it through [`crate::sanitize`].

use crate::catalog::{ExtensionKind, PrivacyLevel};
use crate::model::{
    CustomFieldMap, ExtensionSettings, ToolDescriptor, ToolRecord, NESTED_CUSTOM_KEY,
};
use std::collections::BTreeMap;

/// Scalar custom fields, with the nested `custom` grouping merged in.
fn flatten_custom_fields(fields: &CustomFieldMap) -> BTreeMap<String, String> {
    let mut flat = fields.text_entries();
    if let Some(nested) = fields.group(NESTED_CUSTOM_KEY) {
        for (key, value) in nested.text_entries() {
            flat.entry(key).or_insert(value);
        }
    }
    flat
}

fn parse_dimension(group: &CustomFieldMap, key: &str) -> Option<u32> {
    group
        .text(key)
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
}

/// Placement overrides declared as option groups in the reserved platform's
/// settings (`course_navigation`, `editor_button`, ...).
fn placement_settings(settings: &CustomFieldMap) -> BTreeMap<ExtensionKind, ExtensionSettings> {
    settings
        .iter()
        .filter_map(|(name, value)| {
            let kind = ExtensionKind::from_placement_name(name)?;
            let group = value.as_group()?;
            let text = |key: &str| group.text(key).filter(|v| !v.is_empty()).map(str::to_string);
            Some((
                kind,
                ExtensionSettings {
                    launch_url: text("url"),
                    link_text: text("text"),
                    icon_url: text("icon_url"),
                    width: parse_dimension(group, "selection_width"),
                    height: parse_dimension(group, "selection_height"),
                    visibility: text("visibility"),
                    default: text("default"),
                },
            ))
        })
        .collect()
}

/// Map the descriptor fields relevant to a record onto a new record.
pub fn record_from_descriptor(descriptor: &ToolDescriptor, id: &str) -> ToolRecord {
    let mut record = ToolRecord::new(id, descriptor.title.clone());
    record.description = descriptor.description.clone();
    record.launch_url = descriptor.launch_url.clone();
    record.domain = descriptor.domain.clone();
    record.privacy_level = descriptor
        .privacy_level
        .as_deref()
        .and_then(|p| p.parse::<PrivacyLevel>().ok());

    let custom = flatten_custom_fields(&descriptor.custom_fields);
    record.custom_fields = (!custom.is_empty()).then_some(custom);

    if let Some(settings) = &descriptor.platform_settings {
        record.icon_url = descriptor.icon_url().map(str::to_string);
        record.extension_settings = placement_settings(settings);
        record.extensions = record.extension_settings.keys().copied().collect();
    }

    tracing::debug!(
        tool_id = %record.id,
        extensions = record.extensions.len(),
        "mapped descriptor onto record"
    );
    record
}
