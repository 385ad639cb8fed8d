//! Structured logging facility for ltikit
//!
//! - Single initialization point via `init(profile)`
//! - Structured lifecycle macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use ltikit_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! The command layer (`ltikit-engine`) owns the lifecycle macros. Extraction,
//! derivation and diffing only emit `tracing::debug!` details.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
