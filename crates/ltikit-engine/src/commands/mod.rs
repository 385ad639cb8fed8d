//! Command orchestration layer.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for every command:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (fetch, core) use only `tracing::debug!()` for internal details.

pub mod descriptor;
pub mod drift;
pub mod launch;

/// Engine result type; core and transport failures both surface as `ExError`
pub type Result<T> = std::result::Result<T, ltikit_core::ExError>;
