//! Launch configuration derivation command.

use ltikit_core::{log_op_end, log_op_start};
use ltikit_core::{LaunchConfiguration, ToolRecord};
use std::collections::BTreeMap;
use std::time::Instant;

/// Derive the launch configuration a consuming platform needs for `record`
///
/// Derivation itself cannot fail; malformed templates and missing
/// parameters degrade to empty substitutions.
///
/// ## Arguments
///
/// - `record`: sanitized tool record
/// - `params`: runtime parameters for `{{name}}` placeholders
/// - `host`: base URL prepended to relative launch/icon URLs
pub fn derive_launch_config(
    record: &ToolRecord,
    params: &BTreeMap<String, String>,
    host: &str,
) -> LaunchConfiguration {
    log_op_start!(
        "derive_launch_config",
        tool_id = record.id.as_str(),
        param_count = params.len() as u64
    );
    let start = Instant::now();

    let config = ltikit_core::derive_launch_config(record, params, host);

    log_op_end!(
        "derive_launch_config",
        duration_ms = start.elapsed().as_millis() as u64,
        tool_id = config.id.as_str(),
        placement_count = config.placements().count() as u64
    );

    config
}
