//! Error handling for ltikit-fetch
//!
//! Wraps ltikit-core ExError with transport-specific helpers

use ltikit_core::errors::{ExError, LtiKitError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a generic transport failure (connection error, non-success status)
pub fn fetch_error(location: &str, reason: &str) -> ExError {
    ExError::from(LtiKitError::Fetch {
        location: location.to_string(),
        reason: reason.to_string(),
    })
    .with_op("fetch")
}

/// Create a timeout error
pub fn timeout_error(location: &str) -> ExError {
    ExError::from(LtiKitError::Timeout {
        location: location.to_string(),
    })
    .with_op("fetch")
}

/// Create a rejected-redirect error
pub fn redirect_rejected(location: &str, status: u16) -> ExError {
    ExError::from(LtiKitError::RedirectRejected {
        location: location.to_string(),
        status,
    })
    .with_op("fetch")
}

/// Create an IO error
pub fn io_error(location: &str, err: std::io::Error) -> ExError {
    ExError::new(ltikit_core::errors::ExErrorKind::Io)
        .with_op("read_descriptor")
        .with_entity_id(location)
        .with_message(err.to_string())
}

/// Classify a reqwest failure: timeouts stay distinct from other failures
pub fn from_reqwest(location: &str, err: reqwest::Error) -> ExError {
    if err.is_timeout() {
        timeout_error(location)
    } else {
        fetch_error(location, &err.to_string())
    }
}
