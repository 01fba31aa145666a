//! Error types for format operations

use quichem_core::SyntaxError;
use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// The shorthand could not be parsed
    ParseError(SyntaxError),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the requested operation
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ParseError(err) => write!(f, "Parse error: {err}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::ParseError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SyntaxError> for FormatError {
    fn from(err: SyntaxError) -> Self {
        FormatError::ParseError(err)
    }
}
