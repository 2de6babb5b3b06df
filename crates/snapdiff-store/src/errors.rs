//! Error handling for snapdiff-store
//!
//! Wraps snapdiff-core ExError with store-specific helpers

use snapdiff_core::errors::{ExError, ExErrorKind, SnapDiffError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a decompression error for an upload
pub fn decompression_error(source_name: &str, err: std::io::Error) -> ExError {
    ExError::from(SnapDiffError::Decompression {
        message: err.to_string(),
    })
    .with_op("decompress_gzip")
    .with_entity_id(source_name)
}

/// Create a JSON parse error for an upload
pub fn parse_error(source_name: &str, err: serde_json::Error) -> ExError {
    ExError::from(SnapDiffError::from(err))
        .with_op("parse_json")
        .with_entity_id(source_name)
}

/// Create a persistence error for a result file
pub fn persistence_error(path: &str, source: ExError) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("save_result")
        .with_entity_id(path)
        .with_message(format!("failed to persist result: {}", source.message()))
        .with_source(source)
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
