//! ltikit Engine - Orchestration layer
//!
//! Provides high-level commands that coordinate between the pure core
//! (extraction, derivation, diffing) and the transport collaborator.
//! Every command is wrapped in lifecycle logging.

pub mod commands;

pub use commands::descriptor::{extract_descriptor_str, import_descriptor, import_record};
pub use commands::drift::{config_drift, diff_json};
pub use commands::launch::derive_launch_config;
