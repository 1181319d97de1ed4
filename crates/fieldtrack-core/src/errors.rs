use thiserror::Error;

/// Result type alias using FieldTrackError
pub type Result<T> = std::result::Result<T, FieldTrackError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup
    SchemaNotFound,

    // Input documents
    InvalidCatalog,
    InvalidConfig,

    // Integration/IO
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::SchemaNotFound => "ERR_SCHEMA_NOT_FOUND",
            ExErrorKind::InvalidCatalog => "ERR_INVALID_CATALOG",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional operation and schema context
/// for programmatic handling and debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    schema_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            schema_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add schema ID context
    pub fn with_schema_id(mut self, id: impl Into<String>) -> Self {
        self.schema_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the schema ID context, if any
    pub fn schema_id(&self) -> Option<&str> {
        self.schema_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(schema_id) = &self.schema_id {
            write!(f, " (schema_id: {})", schema_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for change-tracking operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldTrackError {
    /// The catalog has no schema registered under this identifier
    #[error("Schema not found: {schema_id}")]
    SchemaNotFound { schema_id: String },

    /// A catalog document could not be loaded
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// A tracker configuration document could not be loaded
    #[error("Invalid tracker config: {reason}")]
    InvalidConfig { reason: String },

    /// Serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<FieldTrackError> for ExError {
    fn from(err: FieldTrackError) -> Self {
        match err {
            FieldTrackError::SchemaNotFound { schema_id } => {
                ExError::new(ExErrorKind::SchemaNotFound)
                    .with_schema_id(schema_id)
                    .with_message("Catalog has no fields for this schema")
            }
            FieldTrackError::InvalidCatalog { reason } => ExError::new(ExErrorKind::InvalidCatalog)
                .with_message(format!("Invalid catalog: {}", reason)),
            FieldTrackError::InvalidConfig { reason } => ExError::new(ExErrorKind::InvalidConfig)
                .with_message(format!("Invalid tracker config: {}", reason)),
            FieldTrackError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to FieldTrackError
impl From<serde_json::Error> for FieldTrackError {
    fn from(err: serde_json::Error) -> Self {
        FieldTrackError::Serialization {
            message: err.to_string(),
        }
    }
}
