//! ltikit Fetch - transport collaborator for descriptor documents
//!
//! Provides:
//! - `DescriptorSource` trait returning raw descriptor text
//! - `HttpSource`: blocking HTTP(S) client, redirects rejected, bounded timeout
//! - `FileSource`: local files
//! - `source_for`: picks a source from the shape of a location
//!
//! Transport failures (`Fetch`, `Timeout`, `RedirectRejected`, `Io`) are kept
//! distinct from the parse failures raised by extraction.

pub mod errors;
pub mod file;
pub mod http;
pub mod source;

// Re-export key types
pub use errors::Result;
pub use file::FileSource;
pub use http::HttpSource;
pub use source::{is_remote, source_for, DescriptorSource, DEFAULT_TIMEOUT};
