//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
///
/// The converters never fail; these errors come from the format layer around them
/// (unknown format names, invalid JSON, unsupported directions or options).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            FormatError::SerializationError(err.to_string())
        } else {
            FormatError::ParseError(err.to_string())
        }
    }
}
