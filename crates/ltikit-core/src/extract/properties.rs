//! Recursive custom-field extraction from `property` / `options` / `custom` elements.

use crate::model::{CustomFieldMap, NESTED_CUSTOM_KEY};
use roxmltree::Node;

/// Full text content of an element, including text of nested children
pub(crate) fn node_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Walk the element children of `node` and build its custom-field tree.
///
/// - `property` → scalar keyed by its `name` attribute
/// - `options` → nested map keyed by its `name` attribute
/// - `custom` → nested map under [`NESTED_CUSTOM_KEY`]
///
/// Any other node (text, comments, unknown elements) is skipped, as is a
/// `property`/`options` element without a `name`.
pub fn extract_custom_fields(node: Node<'_, '_>) -> CustomFieldMap {
    let mut fields = CustomFieldMap::new();
    for child in node.children().filter(|c| c.is_element()) {
        match child.tag_name().name() {
            "property" => match child.attribute("name") {
                Some(name) => fields.insert_text(name, node_text(child)),
                None => tracing::debug!("skipping property without name attribute"),
            },
            "options" => match child.attribute("name") {
                Some(name) => fields.insert_group(name, extract_custom_fields(child)),
                None => tracing::debug!("skipping options group without name attribute"),
            },
            "custom" => fields.insert_group(NESTED_CUSTOM_KEY, extract_custom_fields(child)),
            _ => {}
        }
    }
    fields
}
