//! Loading documents from source text
//!
//!     Sources come in two flavors, told apart by file extension: ADF JSON (`.json`, `.adf`, or
//!     anything else) and Markdown (`.md`). Only ADF JSON is loaded here; turning Markdown into a
//!     document tree is done by an external parser.
//!
//!     [`parse_document`] performs only the checks needed to call the result a document at all
//!     (valid JSON, `doc` root). Full structural checking is [`crate::validation::validate`].
//!
//!     When a source cannot be loaded, [`fallback_document`] builds a document that shows the
//!     error and the raw source, so that a preview still has something to display.

use crate::ast::{Document, Node, NodeKind};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Kind of source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Adf,
    Markdown,
}

/// Guess the file type from the extension. Anything that is not `.md` is ADF.
pub fn detect_file_type(path: impl AsRef<Path>) -> FileType {
    let is_markdown = path
        .as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
    if is_markdown {
        FileType::Markdown
    } else {
        FileType::Adf
    }
}

/// Errors that can occur while loading a document
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The source is not valid JSON
    InvalidJson { message: String, line: usize, column: usize },
    /// The JSON root is not a `doc` node
    NotADocument,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::InvalidJson {
                message,
                line,
                column,
            } => write!(f, "Invalid JSON at {}:{}: {}", line, column, message),
            LoadError::NotADocument => {
                write!(f, "Invalid ADF document: missing or incorrect type")
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::InvalidJson {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Parse JSON source text into a raw value
///
/// Callers that want to validate should keep the raw value: the validator works on it, the
/// converters work on the [`Document`] built from it.
pub fn parse_value(source: &str) -> Result<Value, LoadError> {
    Ok(serde_json::from_str(source)?)
}

/// Parse JSON source text into a document with a `doc` root
pub fn parse_document(source: &str) -> Result<Document, LoadError> {
    let value = parse_value(source)?;
    if value.get("type").and_then(Value::as_str) != Some("doc") {
        return Err(LoadError::NotADocument);
    }
    Ok(Document::from_value(value))
}

/// A document displaying a load error followed by the raw source
pub fn fallback_document(source: &str, error: &str) -> Document {
    let message = Node::new(NodeKind::Paragraph)
        .with_content(vec![Node::text(format!("Error: {}", error))]);
    let panel = Node::new(NodeKind::Panel)
        .with_attr("panelType", "error")
        .with_content(vec![message]);
    let raw = Node::new(NodeKind::CodeBlock)
        .with_attr("language", "text")
        .with_content(vec![Node::text(source)]);
    Document::new(vec![panel, raw])
}
