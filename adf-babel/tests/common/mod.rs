#![allow(dead_code)]
//! Shared helpers for the format test suites

use adf_core::loader::parse_document;
use adf_core::Document;

/// Load a fixture from `tests/fixtures`
pub fn fixture(name: &str) -> Document {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let source = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path, e));
    parse_document(&source).unwrap_or_else(|e| panic!("Fixture {} is not a document: {}", path, e))
}

/// Parse a JSON literal into a document
pub fn doc(value: serde_json::Value) -> Document {
    Document::from_value(value)
}
