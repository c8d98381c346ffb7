//! Error types for format operations

use std::fmt;

/// Errors that can occur while parsing or serializing through a [`Format`](crate::Format)
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The format does not support the requested direction
    NotSupported(String),
    /// No format registered under the given name or extension
    FormatNotFound(String),
    /// The source could not be parsed
    ParseError(String),
    /// The document could not be serialized
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::NotSupported(msg) => write!(f, "{}", msg),
            FormatError::FormatNotFound(name) => write!(f, "Format '{}' not found", name),
            FormatError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<adf_core::loader::LoadError> for FormatError {
    fn from(err: adf_core::loader::LoadError) -> Self {
        FormatError::ParseError(err.to_string())
    }
}
