//! Per-family validation rules
//!
//!     Each rule receives the raw JSON object of a node whose kind is already known, and records
//!     what is wrong with it. Rules never recurse: marks and children are walked by the caller
//!     once the family rule has run.

use super::result::Report;
use crate::ast::{is_truthy, MarkKind, NodeKind};
use serde_json::{Map, Value};

type Object = Map<String, Value>;

fn attrs(node: &Object) -> Option<&Object> {
    node.get("attrs").and_then(Value::as_object)
}

/// Truthy attribute lookup
fn has_attr(attrs: &Object, key: &str) -> bool {
    attrs.get(key).is_some_and(is_truthy)
}

fn has_truthy(node: &Object, key: &str) -> bool {
    node.get(key).is_some_and(is_truthy)
}

pub(crate) fn block(node: &Object, kind: &NodeKind, path: &str, report: &mut Report) {
    if has_truthy(node, "content") && !node["content"].is_array() {
        report.error(
            format!("{}.content", path),
            "Block node content must be an array",
        );
    }

    match kind {
        NodeKind::Heading => match attrs(node).and_then(|a| a.get("level")) {
            Some(Value::Number(level)) => {
                let level = level.as_f64().unwrap_or(0.0);
                if !(1.0..=6.0).contains(&level) {
                    report.error(
                        format!("{}.attrs.level", path),
                        "Heading level must be between 1 and 6",
                    );
                }
            }
            _ => report.error(
                format!("{}.attrs.level", path),
                "Heading must have a numeric level attribute",
            ),
        },
        NodeKind::CodeBlock => {
            if let Some(language) = attrs(node).and_then(|a| a.get("language")) {
                if is_truthy(language) && !language.is_string() {
                    report.error(
                        format!("{}.attrs.language", path),
                        "Code block language must be a string",
                    );
                }
            }
        }
        NodeKind::Panel => {
            if !attrs(node).is_some_and(|a| has_attr(a, "panelType")) {
                report.warning(
                    format!("{}.attrs.panelType", path),
                    "Panel should have a panelType attribute",
                );
            }
        }
        _ => {}
    }
}

pub(crate) fn text(node: &Object, path: &str, report: &mut Report) {
    if !node.get("text").is_some_and(Value::is_string) {
        report.error(
            format!("{}.text", path),
            "Text node must have a text property of type string",
        );
    }

    if has_truthy(node, "content") {
        report.error(
            format!("{}.content", path),
            "Text nodes should not have content property",
        );
    }
}

pub(crate) fn inline(node: &Object, kind: &NodeKind, path: &str, report: &mut Report) {
    let Some(attrs) = node.get("attrs").filter(|a| is_truthy(a)) else {
        report.error(format!("{}.attrs", path), format!("{} node must have attrs", kind));
        return;
    };
    let empty = Object::new();
    let attrs = attrs.as_object().unwrap_or(&empty);

    match kind {
        NodeKind::Emoji => {
            if !has_attr(attrs, "shortName") || !has_attr(attrs, "id") {
                report.error(
                    format!("{}.attrs", path),
                    "Emoji must have shortName and id attributes",
                );
            }
        }
        NodeKind::Mention => {
            if !has_attr(attrs, "id") {
                report.error(
                    format!("{}.attrs.id", path),
                    "Mention must have an id attribute",
                );
            }
        }
        NodeKind::Status => {
            if !has_attr(attrs, "text") || !has_attr(attrs, "color") {
                report.error(
                    format!("{}.attrs", path),
                    "Status must have text and color attributes",
                );
            }
        }
        _ => {}
    }
}

pub(crate) fn structural(node: &Object, kind: &NodeKind, path: &str, report: &mut Report) {
    let has_children = node
        .get("content")
        .and_then(Value::as_array)
        .is_some_and(|children| !children.is_empty());
    if !has_children {
        report.error(
            format!("{}.content", path),
            format!("{} must have a non-empty content array", kind),
        );
    }

    if matches!(kind, NodeKind::TableCell | NodeKind::TableHeader) {
        if let Some(attrs) = attrs(node) {
            for (key, label) in [("colspan", "Colspan"), ("rowspan", "Rowspan")] {
                if has_attr(attrs, key) && !attrs[key].is_number() {
                    report.error(
                        format!("{}.attrs.{}", path, key),
                        format!("{} must be a number", label),
                    );
                }
            }
        }
    }
}

pub(crate) fn media(node: &Object, kind: &NodeKind, path: &str, report: &mut Report) {
    let Some(attrs) = node.get("attrs").filter(|a| is_truthy(a)) else {
        report.error(format!("{}.attrs", path), "Media node must have attrs");
        return;
    };

    if *kind == NodeKind::Media {
        let empty = Object::new();
        let attrs = attrs.as_object().unwrap_or(&empty);
        if !has_attr(attrs, "id") && !has_attr(attrs, "url") {
            report.error(
                format!("{}.attrs", path),
                "Media must have either id or url attribute",
            );
        }
        if !has_attr(attrs, "type") {
            report.error(
                format!("{}.attrs.type", path),
                "Media must have a type attribute",
            );
        }
    }
}

pub(crate) fn mark(mark: &Value, path: &str, report: &mut Report) {
    let Some(mark) = mark.as_object() else {
        report.error(path, "Mark must be a valid object");
        return;
    };

    let Some(tag) = mark
        .get("type")
        .and_then(Value::as_str)
        .filter(|tag| !tag.is_empty())
    else {
        report.error(format!("{}.type", path), "Mark must have a type property");
        return;
    };

    let kind = MarkKind::from_tag(tag);
    let mark_attrs = attrs(mark);
    match kind {
        MarkKind::Unknown(_) => {
            report.warning(format!("{}.type", path), format!("Unknown mark type: {}", tag));
        }
        MarkKind::Link if !mark_attrs.is_some_and(|a| has_attr(a, "href")) => {
            report.error(
                format!("{}.attrs.href", path),
                "Link mark must have href attribute",
            );
        }
        MarkKind::TextColor if !mark_attrs.is_some_and(|a| has_attr(a, "color")) => {
            report.error(
                format!("{}.attrs.color", path),
                "TextColor mark must have color attribute",
            );
        }
        _ => {}
    }
}
