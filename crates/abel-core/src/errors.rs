use abel_core_types::RequestId;
use thiserror::Error;

use crate::model::EntityKind;
use crate::model::EntityOperationType;

/// Result type alias using AbelError
pub type Result<T> = std::result::Result<T, AbelError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    DuplicateGuid,
    InvalidOperation,
    InvalidConfig,

    // Comparison
    /// A guid maps to a virtual entity on one side and a reporting entity on the other
    VariantConflict,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::DuplicateGuid => "ERR_DUPLICATE_GUID",
            ExErrorKind::InvalidOperation => "ERR_INVALID_OPERATION",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::VariantConflict => "ERR_VARIANT_CONFLICT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context
/// (operation, entity guid, run id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
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
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity guid context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
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

    /// Get the entity guid context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
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
            write!(f, " (bc_guid: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
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

/// Error taxonomy for reconciliation operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AbelError {
    /// The same guid resolves to different entity variants in the two snapshots
    #[error(
        "GUID {bc_guid} maps to a {current_kind} entity in the current model and a {updated_kind} entity in the updated model"
    )]
    VariantConflict {
        bc_guid: String,
        current_kind: EntityKind,
        updated_kind: EntityKind,
    },

    /// Two entities in one snapshot share a guid
    #[error("Duplicate bc_guid in model: {bc_guid}")]
    DuplicateGuid { bc_guid: String },

    /// UPDATE operation constructed without any changed attribute
    #[error("UPDATE operation for {bc_guid} requires a non-empty update mask")]
    EmptyUpdateMask { bc_guid: String },

    /// Update mask supplied for an operation that is not UPDATE
    #[error("{operation} operation for {bc_guid} cannot carry an update mask")]
    UnexpectedUpdateMask {
        bc_guid: String,
        operation: EntityOperationType,
    },

    /// Entity guid not present in any supplied snapshot
    #[error("Entity not found: {bc_guid}")]
    EntityNotFound { bc_guid: String },

    /// Diff configuration is out of range
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// Conversion from AbelError to ExError
impl From<AbelError> for ExError {
    fn from(err: AbelError) -> Self {
        match err {
            AbelError::VariantConflict {
                bc_guid,
                current_kind,
                updated_kind,
            } => ExError::new(ExErrorKind::VariantConflict)
                .with_entity_id(bc_guid)
                .with_op("determine_entity_operations")
                .with_message(format!(
                    "Maps to both a {} entity and a {} entity",
                    current_kind, updated_kind
                )),

            AbelError::DuplicateGuid { bc_guid } => ExError::new(ExErrorKind::DuplicateGuid)
                .with_entity_id(bc_guid)
                .with_op("build_model")
                .with_message("Duplicate bc_guid in model"),

            AbelError::EmptyUpdateMask { bc_guid } => {
                ExError::new(ExErrorKind::InvalidOperation)
                    .with_entity_id(bc_guid)
                    .with_message("UPDATE operation requires a non-empty update mask")
            }

            AbelError::UnexpectedUpdateMask { bc_guid, operation } => {
                ExError::new(ExErrorKind::InvalidOperation)
                    .with_entity_id(bc_guid)
                    .with_message(format!(
                        "{} operation cannot carry an update mask",
                        operation
                    ))
            }

            AbelError::EntityNotFound { bc_guid } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(bc_guid)
                .with_message("Entity not found"),

            AbelError::InvalidConfig { reason } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("validate_config")
                .with_message(format!("Invalid configuration: {}", reason)),
        }
    }
}
