//! Descriptor sources and location-based selection.

use crate::errors::Result;
use crate::file::FileSource;
use crate::http::HttpSource;
use std::time::Duration;

/// Default bound on a single descriptor request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can hand back the raw text of a descriptor document.
///
/// Failures are transport failures (`Fetch`, `Timeout`, `RedirectRejected`,
/// `Io`); parsing the text is the caller's concern.
pub trait DescriptorSource: Send + Sync {
    fn fetch(&self, location: &str) -> Result<String>;
}

/// True for `http://` and `https://` locations
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Pick the source for a location: HTTP(S) URLs go over the network,
/// anything else is read from the local filesystem.
///
/// # Errors
///
/// Returns `Fetch` if the HTTP client cannot be constructed.
pub fn source_for(location: &str, timeout: Duration) -> Result<Box<dyn DescriptorSource>> {
    if is_remote(location) {
        Ok(Box::new(HttpSource::new(timeout)?))
    } else {
        Ok(Box::new(FileSource::new()))
    }
}
