//! Export tests (ADF → Markdown)

use crate::common::{doc, fixture};
use adf_babel::formats::MarkdownFormat;
use adf_babel::Format;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};
use serde_json::json;

fn comrak_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options
}

/// Top-level comrak nodes of the emitted markdown
fn block_values<'a>(root: &'a AstNode<'a>) -> Vec<NodeValue> {
    root.children()
        .map(|node| node.data.borrow().value.clone())
        .collect()
}

#[test]
fn test_kitchensink_export() {
    let md = MarkdownFormat
        .serialize(&fixture("kitchensink.json"))
        .expect("Failed to serialize markdown");

    let expected = [
        "# Sample Document",
        "Plain, **bold**, *italic* and [a link](https://example.com/docs).",
        "- First item\n- Second item\n  1. Nested one\n  2. Nested two",
        "```rust\nfn main() {\n    println!(\"hi\");\n}\n```",
        "> Quoted words",
        "> ⚠️ **WARNING**\n> Warning message",
        "|Name|State|\n|---|---|\n|Build|[DONE]|",
        "---",
        ":tada: Shipped  \nnext line",
    ]
    .join("\n\n");

    assert_eq!(md, expected);
}

#[test]
fn test_kitchensink_reparses_with_comrak() {
    let md = MarkdownFormat
        .serialize(&fixture("kitchensink.json"))
        .unwrap();

    let arena = Arena::new();
    let root = parse_document(&arena, &md, &comrak_options());
    let blocks = block_values(root);

    assert!(matches!(&blocks[0], NodeValue::Heading(h) if h.level == 1));
    assert!(matches!(blocks[1], NodeValue::Paragraph));
    assert!(matches!(&blocks[2], NodeValue::List(l) if l.list_type == ListType::Bullet));
    assert!(matches!(&blocks[3], NodeValue::CodeBlock(c) if c.info == "rust"));
    assert!(matches!(blocks[4], NodeValue::BlockQuote));
    assert!(matches!(blocks[5], NodeValue::BlockQuote));
    assert!(matches!(blocks[6], NodeValue::Table(_)));
    assert!(matches!(blocks[7], NodeValue::ThematicBreak));

    // The ordered list stays nested inside the second bullet item
    let nested_ordered = root.descendants().any(|node| {
        matches!(
            &node.data.borrow().value,
            NodeValue::List(l) if l.list_type == ListType::Ordered
        )
    });
    assert!(nested_ordered);

    // The hard break survives as a line break
    let has_line_break = root
        .descendants()
        .any(|node| matches!(node.data.borrow().value, NodeValue::LineBreak));
    assert!(has_line_break);
}

#[test]
fn test_float_heading_level_keeps_its_level() {
    let document = doc(json!({
        "type": "doc",
        "version": 1,
        "content": [{
            "type": "heading",
            "attrs": {"level": 2.0},
            "content": [{"type": "text", "text": "T"}]
        }]
    }));

    assert_eq!(MarkdownFormat.serialize(&document).unwrap(), "## T");
}

#[test]
fn test_warning_panel() {
    let document = doc(json!({
        "type": "doc",
        "version": 1,
        "content": [{
            "type": "panel",
            "attrs": {"panelType": "warning"},
            "content": [{"type": "paragraph", "content": [{"type": "text", "text": "Warning message"}]}]
        }]
    }));

    let md = MarkdownFormat.serialize(&document).unwrap();
    let lines: Vec<&str> = md.lines().collect();
    assert_eq!(lines, vec!["> ⚠️ **WARNING**", "> Warning message"]);
}

#[test]
fn test_panel_without_type_is_info() {
    let document = doc(json!({
        "type": "doc",
        "version": 1,
        "content": [{
            "type": "panel",
            "content": [{"type": "paragraph", "content": [{"type": "text", "text": "FYI"}]}]
        }]
    }));

    let md = MarkdownFormat.serialize(&document).unwrap();
    assert_eq!(md, "> ℹ️ **INFO**\n> FYI");
}

#[test]
fn test_status_is_bracketed_and_uppercased() {
    let document = doc(json!({
        "type": "doc",
        "version": 1,
        "content": [{
            "type": "paragraph",
            "content": [{"type": "status", "attrs": {"text": "todo", "color": "blue"}}]
        }]
    }));

    assert_eq!(MarkdownFormat.serialize(&document).unwrap(), "[TODO]");
}

#[test]
fn test_emphasis_reparses() {
    let document = doc(json!({
        "type": "doc",
        "version": 1,
        "content": [{
            "type": "paragraph",
            "content": [
                {"type": "text", "text": "gone", "marks": [{"type": "strike"}]},
                {"type": "text", "text": " "},
                {"type": "text", "text": "x = 1", "marks": [{"type": "code"}]}
            ]
        }]
    }));

    let md = MarkdownFormat.serialize(&document).unwrap();
    assert_eq!(md, "~~gone~~ `x = 1`");

    let arena = Arena::new();
    let root = parse_document(&arena, &md, &comrak_options());
    let values: Vec<NodeValue> = root
        .descendants()
        .map(|node| node.data.borrow().value.clone())
        .collect();
    assert!(values
        .iter()
        .any(|v| matches!(v, NodeValue::Strikethrough)));
    assert!(values
        .iter()
        .any(|v| matches!(v, NodeValue::Code(code) if code.literal == "x = 1")));
}

#[test]
fn test_unvalidated_input_does_not_fail() {
    let document = doc(json!({
        "type": "doc",
        "content": [
            {"type": "heading", "attrs": {"level": "big"}, "content": [{"type": "text", "text": "Odd"}]},
            {"type": "mystery", "content": [{"type": "text", "text": "inside"}]},
            {"type": "paragraph", "content": "not an array"},
            42
        ]
    }));

    let md = MarkdownFormat.serialize(&document).unwrap();
    assert!(md.starts_with("# Odd\n\ninside"));
}
