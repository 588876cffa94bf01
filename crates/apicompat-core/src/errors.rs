use thiserror::Error;

/// Result type alias using CompatError
pub type Result<T> = std::result::Result<T, CompatError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Comparisons themselves never fail; these kinds cover the surfaces around
/// them that can (decoding snapshots, validating handles supplied by a host).
/// Each kind maps to a stable error code for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidSnapshot,
    EmptyName,
    DuplicateField,
    DuplicateMethod,

    // Decoding
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::EmptyName => "ERR_EMPTY_NAME",
            ExErrorKind::DuplicateField => "ERR_DUPLICATE_FIELD",
            ExErrorKind::DuplicateMethod => "ERR_DUPLICATE_METHOD",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus the
/// declaration context (type, field, operation) that produced it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    type_name: Option<String>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            type_name: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add declared type name context
    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = Some(name.into());
        self
    }

    /// Add field or method name context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
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

    /// Get the type name context, if any
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Get the field or method name context, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
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
        if let Some(type_name) = &self.type_name {
            write!(f, " (type: {})", type_name)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised while decoding or validating type handles
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompatError {
    /// Snapshot has no declared name
    #[error("Snapshot has an empty type name")]
    EmptyTypeName,

    /// Two fields of one struct share a name
    #[error("Duplicate field {field} in {type_name}")]
    DuplicateField { type_name: String, field: String },

    /// Two methods of one interface share a name
    #[error("Duplicate method {method} in {type_name}")]
    DuplicateMethod { type_name: String, method: String },

    /// Snapshot bytes could not be decoded
    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot { message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for CompatError {
    fn from(err: serde_json::Error) -> Self {
        CompatError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Conversion from CompatError to ExError
impl From<CompatError> for ExError {
    fn from(err: CompatError) -> Self {
        match err {
            CompatError::EmptyTypeName => ExError::new(ExErrorKind::EmptyName)
                .with_message("Snapshot has an empty type name"),

            CompatError::DuplicateField { type_name, field } => {
                ExError::new(ExErrorKind::DuplicateField)
                    .with_type_name(type_name)
                    .with_field(field)
                    .with_message("Field name declared more than once")
            }

            CompatError::DuplicateMethod { type_name, method } => {
                ExError::new(ExErrorKind::DuplicateMethod)
                    .with_type_name(type_name)
                    .with_field(method)
                    .with_message("Method name declared more than once")
            }

            CompatError::InvalidSnapshot { message } => {
                ExError::new(ExErrorKind::InvalidSnapshot).with_message(message)
            }

            CompatError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}
