use thiserror::Error;

/// Result type alias using LtiKitError
pub type Result<T> = std::result::Result<T, LtiKitError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI/API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Descriptor parsing
    /// Document is well-formed XML but has no cartridge link element
    MalformedDescriptor,
    /// Link element present but no title could be resolved
    MissingTitle,
    /// Document is not well-formed XML
    InvalidXml,

    // Record handling
    InvalidRecord,

    // Transport
    Fetch,
    Timeout,
    RedirectRejected,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MalformedDescriptor => "ERR_MALFORMED_DESCRIPTOR",
            ExErrorKind::MissingTitle => "ERR_MISSING_TITLE",
            ExErrorKind::InvalidXml => "ERR_INVALID_XML",
            ExErrorKind::InvalidRecord => "ERR_INVALID_RECORD",
            ExErrorKind::Fetch => "ERR_FETCH",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::RedirectRejected => "ERR_REDIRECT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }

    /// True for kinds raised by the transport collaborator rather than by parsing
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            ExErrorKind::Fetch | ExErrorKind::Timeout | ExErrorKind::RedirectRejected
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional operation/entity context.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (tool id, URL, file path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for ltikit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LtiKitError {
    // ===== Descriptor Errors =====
    /// No `cartridge_basiclti_link` element anywhere in the document
    #[error("Invalid configuration: no cartridge_basiclti_link element found")]
    MalformedDescriptor,

    /// Link element has no title child
    #[error("Couldn't find title attribute")]
    MissingTitle,

    /// The document could not be parsed as XML
    #[error("Invalid XML: {reason}")]
    InvalidXml { reason: String },

    // ===== Transport Errors =====
    /// Generic transport failure (connection, non-success status)
    #[error("Fetch failed for {location}: {reason}")]
    Fetch { location: String, reason: String },

    /// Request exceeded the configured timeout
    #[error("Request timed out: {location}")]
    Timeout { location: String },

    /// Server answered with a redirect, which is never followed
    #[error("Redirects are not followed ({status}) for {location}")]
    RedirectRejected { location: String, status: u16 },

    // ===== Record Errors =====
    /// Submitted form fields could not produce a usable record
    #[error("Invalid tool record: {reason}")]
    InvalidRecord { reason: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<LtiKitError> for ExError {
    fn from(err: LtiKitError) -> Self {
        let message = err.to_string();
        match err {
            LtiKitError::MalformedDescriptor => {
                ExError::new(ExErrorKind::MalformedDescriptor).with_message(message)
            }
            LtiKitError::MissingTitle => {
                ExError::new(ExErrorKind::MissingTitle).with_message(message)
            }
            LtiKitError::InvalidXml { .. } => {
                ExError::new(ExErrorKind::InvalidXml).with_message(message)
            }
            LtiKitError::Fetch { location, .. } => ExError::new(ExErrorKind::Fetch)
                .with_entity_id(location)
                .with_message(message),
            LtiKitError::Timeout { location } => ExError::new(ExErrorKind::Timeout)
                .with_entity_id(location)
                .with_message(message),
            LtiKitError::RedirectRejected { location, .. } => {
                ExError::new(ExErrorKind::RedirectRejected)
                    .with_entity_id(location)
                    .with_message(message)
            }
            LtiKitError::InvalidRecord { .. } => {
                ExError::new(ExErrorKind::InvalidRecord).with_message(message)
            }
            LtiKitError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for LtiKitError {
    fn from(err: serde_json::Error) -> Self {
        LtiKitError::Serialization {
            message: err.to_string(),
        }
    }
}
