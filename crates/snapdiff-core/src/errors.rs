use snapdiff_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using SnapDiffError
pub type Result<T> = std::result::Result<T, SnapDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in logs and tests, and to a
/// client/server classification used by the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Request shape
    InvalidInput,
    MissingUploads,
    UnknownVariant,

    // Snapshot content
    MalformedDocument,
    MalformedRecord,

    // Decoding
    Decompression,
    Serialization,

    // Integration/IO
    Io,
    Persistence,
    InvalidConfig,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingUploads => "ERR_MISSING_UPLOADS",
            ExErrorKind::UnknownVariant => "ERR_UNKNOWN_VARIANT",
            ExErrorKind::MalformedDocument => "ERR_MALFORMED_DOCUMENT",
            ExErrorKind::MalformedRecord => "ERR_MALFORMED_RECORD",
            ExErrorKind::Decompression => "ERR_DECOMPRESSION",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the caller caused this error (maps to a 400-class response)
    ///
    /// Malformed snapshot content is deliberately a server-side failure: the
    /// upload was well-formed, the data inside it was not.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput | ExErrorKind::MissingUploads | ExErrorKind::UnknownVariant
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification used for programmatic handling plus context
/// (operation, record key, request correlation) that only ever reaches logs.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
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
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (record key, file name, variant name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
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

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
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
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for snapshot comparison
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapDiffError {
    // ===== Request Errors =====
    /// The upload did not carry both `file1` and `file2`
    #[error("Exactly two files are required (received: {received:?})")]
    MissingUploads { received: Vec<String> },

    /// The multipart body could not be read
    #[error("Malformed upload: {reason}")]
    MalformedUpload { reason: String },

    /// The variant selector names no known record shape
    #[error("Unknown snapshot variant: {name}")]
    UnknownVariant { name: String },

    // ===== Snapshot Errors =====
    /// Document root is not an object or `snapshot` is absent / not an array
    #[error("Malformed snapshot document: {reason}")]
    MalformedDocument { reason: String },

    /// A record lacks the identifier sub-fields its variant keys on
    #[error("Malformed record at position {position}: {reason}")]
    MalformedRecord { position: usize, reason: String },

    // ===== Decoding Errors =====
    /// Upload bytes are not a valid gzip stream
    #[error("Decompression failed: {message}")]
    Decompression { message: String },

    /// JSON parse or serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    // ===== Internal Errors =====
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from SnapDiffError to ExError
impl From<SnapDiffError> for ExError {
    fn from(err: SnapDiffError) -> Self {
        match err {
            SnapDiffError::MissingUploads { received } => ExError::new(ExErrorKind::MissingUploads)
                .with_message(format!(
                    "Exactly two files are required, received fields: {}",
                    received.join(", ")
                )),

            SnapDiffError::MalformedUpload { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }

            SnapDiffError::UnknownVariant { name } => ExError::new(ExErrorKind::UnknownVariant)
                .with_entity_id(name)
                .with_message("Invalid endpoint"),

            SnapDiffError::MalformedDocument { reason } => {
                ExError::new(ExErrorKind::MalformedDocument).with_message(reason)
            }

            SnapDiffError::MalformedRecord { position, reason } => {
                ExError::new(ExErrorKind::MalformedRecord)
                    .with_entity_id(format!("snapshot[{}]", position))
                    .with_message(reason)
            }

            SnapDiffError::Decompression { message } => {
                ExError::new(ExErrorKind::Decompression).with_message(message)
            }

            SnapDiffError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            SnapDiffError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to SnapDiffError
impl From<serde_json::Error> for SnapDiffError {
    fn from(err: serde_json::Error) -> Self {
        SnapDiffError::Serialization {
            message: err.to_string(),
        }
    }
}
