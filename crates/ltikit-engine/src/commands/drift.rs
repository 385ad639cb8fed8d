//! Configuration drift and generic structural diff commands.

use super::Result;
use ltikit_core::errors::ExError;
use ltikit_core::{diff, DiffNode, LaunchConfiguration, Tree};
use ltikit_core::{log_op_end, log_op_error, log_op_start};
use serde_json::Value;
use std::time::Instant;

/// Compare two launch configurations field by field
///
/// Both sides are serialized to value trees first, so optional fields that
/// are skipped on one side count as absent.
///
/// ## Returns
///
/// `None` when nothing changed.
///
/// ## Errors
///
/// - `Serialization`: a configuration could not be turned into a value tree
pub fn config_drift(
    before: &LaunchConfiguration,
    after: &LaunchConfiguration,
) -> Result<Option<DiffNode>> {
    log_op_start!("config_drift", tool_id = before.id.as_str());
    let start = Instant::now();

    let result = to_tree(before)
        .and_then(|a| to_tree(after).map(|b| diff(&a, &b)))
        .map_err(|e| {
            log_op_error!(
                "config_drift",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "config_drift",
        duration_ms = start.elapsed().as_millis() as u64,
        change_count = result.as_ref().map_or(0, DiffNode::change_count) as u64
    );

    Ok(result)
}

/// Structural diff over two arbitrary JSON documents
pub fn diff_json(a: &Value, b: &Value) -> Option<DiffNode> {
    log_op_start!("diff_json");
    let start = Instant::now();

    let result = diff(&Tree::from(a), &Tree::from(b));

    log_op_end!(
        "diff_json",
        duration_ms = start.elapsed().as_millis() as u64,
        change_count = result.as_ref().map_or(0, DiffNode::change_count) as u64
    );

    result
}

fn to_tree(config: &LaunchConfiguration) -> Result<Tree> {
    Tree::from_serialize(config).map_err(|e| ExError::from(e).with_op("config_drift"))
}
