//! JSON format implementation
//!
//! The native ADF representation. Parsing only requires valid JSON with a `doc` root; the tree
//! is built leniently and structural problems are left to the validator. Serialization
//! pretty-prints with two-space indentation.

use crate::error::FormatError;
use crate::format::Format;
use adf_core::loader;
use adf_core::Document;

/// ADF JSON format
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Atlassian Document Format JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json", "adf"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(loader::parse_document(source)?)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
