//! Local descriptor files.

use crate::errors::{io_error, Result};
use crate::source::DescriptorSource;
use std::fs;

/// Reads descriptors from the local filesystem; a `file://` prefix is accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl FileSource {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptorSource for FileSource {
    fn fetch(&self, location: &str) -> Result<String> {
        let path = location.strip_prefix("file://").unwrap_or(location);
        tracing::debug!(path, "reading descriptor file");
        fs::read_to_string(path).map_err(|e| io_error(location, e))
    }
}
