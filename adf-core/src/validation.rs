//! Structural validation of ADF documents
//!
//!     The validator answers one question: is this JSON a well-formed ADF document? It works on
//!     the raw [`serde_json::Value`] rather than on the tree model, because the model is built
//!     leniently and would hide exactly the defects the validator is looking for.
//!
//! Checks
//!
//!     1. The input must be a JSON object. If it is not, a single error is reported at the empty
//!        path and nothing else is checked.
//!     2. Root invariants (`type` is `doc`, `version` is 1, `content` is an array) are checked
//!        independently, so all of them can be reported at once.
//!     3. Every node is checked by the rule of its family (block, text, inline, structural,
//!        media), then its marks, then its children. See [`rules`].
//!
//!     Unknown node and mark kinds are warnings: documents may use extensions this crate does not
//!     know about. Children of an unknown node are still validated.
//!
//! Paths
//!
//!     Issues are addressed with dotted/bracketed paths such as `content[1].content[0].marks[2]`.
//!     They are diagnostics only; source line/column resolution is left to the caller (see
//!     [`ValidationIssue::at`]).
//!
//!     Each call to [`validate`] owns its accumulator, so concurrent calls share nothing.

mod result;
mod rules;

pub use result::{ValidationIssue, ValidationResult};

use crate::ast::{NodeFamily, NodeKind, ADF_VERSION};
use result::Report;
use serde_json::Value;

/// Validate an untrusted JSON value as an ADF document
///
/// Never panics; every problem is reported in the returned result.
pub fn validate(input: &Value) -> ValidationResult {
    let mut report = Report::default();

    let Some(doc) = input.as_object() else {
        report.error("", "Document must be a valid JSON object");
        return report.finish();
    };

    match doc.get("type") {
        Some(Value::String(tag)) if tag == "doc" => {}
        found => report.error(
            "type",
            format!("Document type must be \"doc\", found {}", describe(found)),
        ),
    }

    let version_ok = doc
        .get("version")
        .and_then(Value::as_f64)
        .is_some_and(|v| v == ADF_VERSION as f64);
    if !version_ok {
        report.error(
            "version",
            format!(
                "Document version must be {}, found {}",
                ADF_VERSION,
                describe(doc.get("version"))
            ),
        );
    }

    match doc.get("content") {
        Some(Value::Array(content)) => {
            for (index, node) in content.iter().enumerate() {
                validate_node(node, &format!("content[{}]", index), &mut report);
            }
        }
        _ => report.error("content", "Document must have a content array"),
    }

    let result = report.finish();
    tracing::debug!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated document"
    );
    result
}

fn validate_node(value: &Value, path: &str, report: &mut Report) {
    let Some(node) = value.as_object() else {
        report.error(path, "Node must be a valid object");
        return;
    };

    let Some(tag) = node
        .get("type")
        .and_then(Value::as_str)
        .filter(|tag| !tag.is_empty())
    else {
        report.error(format!("{}.type", path), "Node must have a type property");
        return;
    };

    let kind = NodeKind::from_tag(tag);
    match kind.family() {
        Some(NodeFamily::Block) => rules::block(node, &kind, path, report),
        Some(NodeFamily::Text) => rules::text(node, path, report),
        Some(NodeFamily::Inline) => rules::inline(node, &kind, path, report),
        Some(NodeFamily::Structural) => rules::structural(node, &kind, path, report),
        Some(NodeFamily::Media) => rules::media(node, &kind, path, report),
        Some(NodeFamily::Break) => {}
        None => report.warning(format!("{}.type", path), format!("Unknown node type: {}", tag)),
    }

    if let Some(Value::Array(marks)) = node.get("marks") {
        for (index, mark) in marks.iter().enumerate() {
            rules::mark(mark, &format!("{}.marks[{}]", path, index), report);
        }
    }

    if let Some(Value::Array(children)) = node.get("content") {
        for (index, child) in children.iter().enumerate() {
            validate_node(child, &format!("{}.content[{}]", path, index), report);
        }
    }
}

/// How a found value is quoted in root-level messages
fn describe(value: Option<&Value>) -> String {
    match value {
        None => "nothing".to_string(),
        Some(Value::String(s)) => format!("\"{}\"", s),
        Some(other) => other.to_string(),
    }
}
