//! Descriptor import commands.

use super::Result;
use ltikit_core::errors::ExError;
use ltikit_core::{log_op_end, log_op_error, log_op_start};
use ltikit_core::{ToolDescriptor, ToolRecord};
use ltikit_fetch::DescriptorSource;
use std::time::Instant;

/// Fetch a descriptor document and extract it
///
/// ## Arguments
///
/// - `source`: transport used to retrieve the raw XML
/// - `location`: URL or path handed to the source
///
/// ## Errors
///
/// - `Fetch` / `Timeout` / `RedirectRejected` / `Io`: retrieval failed
/// - `InvalidXml`, `MalformedDescriptor`, `MissingTitle`: the document was unusable
pub fn import_descriptor(source: &dyn DescriptorSource, location: &str) -> Result<ToolDescriptor> {
    log_op_start!("import_descriptor", location = location);
    let start = Instant::now();

    let result = source
        .fetch(location)
        .and_then(|xml| extract(&xml).map_err(|e| e.with_entity_id(location)))
        .map_err(|e| {
            log_op_error!(
                "import_descriptor",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "import_descriptor",
        duration_ms = start.elapsed().as_millis() as u64,
        title = result.title.as_str()
    );

    Ok(result)
}

/// Extract a descriptor from XML already in memory
///
/// ## Errors
///
/// - `InvalidXml`: the text is not well-formed
/// - `MalformedDescriptor`: no link element
/// - `MissingTitle`: link element without a title
pub fn extract_descriptor_str(xml: &str) -> Result<ToolDescriptor> {
    log_op_start!("extract_descriptor", bytes = xml.len() as u64);
    let start = Instant::now();

    let result = extract(xml).map_err(|e| {
        log_op_error!(
            "extract_descriptor",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "extract_descriptor",
        duration_ms = start.elapsed().as_millis() as u64,
        title = result.title.as_str()
    );

    Ok(result)
}

/// Fetch a descriptor and map it straight into a stored tool record
///
/// ## Errors
///
/// Same as [`import_descriptor`].
pub fn import_record(
    source: &dyn DescriptorSource,
    location: &str,
    id: &str,
) -> Result<ToolRecord> {
    log_op_start!("import_record", location = location, tool_id = id);
    let start = Instant::now();

    let result = source
        .fetch(location)
        .and_then(|xml| extract(&xml).map_err(|e| e.with_entity_id(location)))
        .map(|descriptor| ltikit_core::record_from_descriptor(&descriptor, id))
        .map_err(|e| {
            log_op_error!(
                "import_record",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "import_record",
        duration_ms = start.elapsed().as_millis() as u64,
        tool_id = id,
        extension_count = result.extensions.len() as u64
    );

    Ok(result)
}

fn extract(xml: &str) -> Result<ToolDescriptor> {
    ltikit_core::extract_descriptor(xml)
        .map_err(|e| ExError::from(e).with_op("extract_descriptor"))
}
