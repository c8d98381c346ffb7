//! Validation result types

use serde::Serialize;
use std::fmt;

/// A single error or warning found by the validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Dotted/bracketed address of the offending value, e.g. `content[0].attrs.level`.
    /// Empty when the issue concerns the input as a whole.
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Attach source coordinates resolved by the caller. The validator never computes these.
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        };
        match (self.line, self.column) {
            (Some(line), Some(column)) => {
                write!(f, "{} ({}:{}): {}", path, line, column, self.message)
            }
            _ => write!(f, "{}: {}", path, self.message),
        }
    }
}

/// Outcome of validating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Whether the document passes. In strict mode warnings fail the check too.
    pub fn passes(&self, strict: bool) -> bool {
        self.is_valid && (!strict || self.warnings.is_empty())
    }
}

/// Accumulator threaded through one validation pass
#[derive(Debug, Default)]
pub(crate) struct Report {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Report {
    pub(crate) fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationIssue::new(path, message));
    }

    pub(crate) fn warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationIssue::new(path, message));
    }

    pub(crate) fn finish(self) -> ValidationResult {
        ValidationResult {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue::new("content[0].type", "Node must have a type property");
        assert_eq!(
            issue.to_string(),
            "content[0].type: Node must have a type property"
        );

        let root = ValidationIssue::new("", "Document must be a valid JSON object");
        assert_eq!(root.to_string(), "<root>: Document must be a valid JSON object");

        let located = ValidationIssue::new("version", "bad").at(3, 14);
        assert_eq!(located.to_string(), "version (3:14): bad");
    }

    #[test]
    fn test_serializes_camel_case_without_empty_location() {
        let mut report = Report::default();
        report.warning("content[0].type", "Unknown node type: x");
        let json = serde_json::to_value(report.finish()).unwrap();

        assert_eq!(json["isValid"], true);
        assert_eq!(json["warnings"][0]["path"], "content[0].type");
        assert!(json["warnings"][0].get("line").is_none());
    }

    #[test]
    fn test_strict_mode() {
        let mut report = Report::default();
        report.warning("content[0].attrs.panelType", "Panel should have a panelType attribute");
        let result = report.finish();

        assert!(result.passes(false));
        assert!(!result.passes(true));
    }
}
