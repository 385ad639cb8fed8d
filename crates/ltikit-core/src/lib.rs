//! ltikit Core - tool cartridge semantic kernel
//!
//! This crate provides the pure, synchronous building blocks of ltikit:
//! - Data model for descriptors, stored tool records and launch configurations
//! - Namespace-aware extraction of cartridge XML into a `ToolDescriptor`
//! - Launch configuration derivation with templating and sugar app types
//! - Structural diff over nested value trees
//! - Record sanitization against closed catalogs
//!
//! Nothing here performs I/O; fetching documents is the transport crate's job.

pub mod adapter;
pub mod catalog;
pub mod derive;
pub mod diff;
pub mod errors;
pub mod extract;
pub mod logging_facility;
pub mod model;
pub mod sanitize;

#[doc(hidden)]
pub mod __private {
    pub use ltikit_core_types::schema;
    pub use tracing;
}

// Re-export commonly used types
pub use adapter::record_from_descriptor;
pub use derive::derive_launch_config;
pub use diff::{diff, DiffNode};
pub use errors::{ExError, ExErrorKind, LtiKitError, Result};
pub use extract::extract_descriptor;
pub use model::{LaunchConfiguration, ToolDescriptor, ToolRecord, Tree};
pub use sanitize::sanitize_record;
