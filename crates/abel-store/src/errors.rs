//! Error handling for abel-store
//!
//! Wraps abel-core ExError with loader-specific helpers

use abel_core::errors::{AbelError, ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

pub const OP_SNAPSHOT_PARSE: &str = "snapshot_parse";
pub const OP_OPERATIONS_PARSE: &str = "operations_parse";
pub const OP_CONFIG_PARSE: &str = "config_parse";

/// Create a snapshot validation error
pub fn snapshot_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(OP_SNAPSHOT_PARSE)
        .with_message(reason.to_string())
}

/// Create an operations validation error
pub fn operations_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(OP_OPERATIONS_PARSE)
        .with_message(reason.to_string())
}

/// Create a config validation error
pub fn config_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(OP_CONFIG_PARSE)
        .with_message(reason.to_string())
}

/// Wrap a core error raised while validating an input file
///
/// The result is `InvalidInput` for `operation`; the core error is kept as
/// the source and its guid is carried over.
pub fn invalid_entry(operation: &str, err: AbelError) -> ExError {
    let message = err.to_string();
    let source: ExError = err.into();
    let wrapped = ExError::new(ExErrorKind::InvalidInput)
        .with_op(operation.to_string())
        .with_message(message);
    let wrapped = match source.entity_id() {
        Some(bc_guid) => wrapped.with_entity_id(bc_guid),
        None => wrapped,
    };
    wrapped.with_source(source)
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
