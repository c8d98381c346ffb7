//! Export tests (ADF → HTML)

use crate::common::{doc, fixture};
use adf_babel::formats::{HtmlFormat, HtmlOptions};
use adf_babel::{to_html, Format, FormatRegistry};
use serde_json::json;

fn fragment_format() -> HtmlFormat {
    HtmlFormat::new(HtmlOptions::fragment())
}

#[test]
fn test_kitchensink_fragment() {
    let html = fragment_format()
        .serialize(&fixture("kitchensink.json"))
        .expect("Failed to serialize HTML");

    assert!(html.starts_with("<h1>Sample Document</h1>"));
    assert!(html.contains(
        "<p>Plain, <strong>bold</strong>, <em>italic</em> and <a href=\"https://example.com/docs\">a link</a>.</p>"
    ));
    assert!(html.contains(
        "<ul><li><p>First item</p></li><li><p>Second item</p><ol><li><p>Nested one</p></li><li><p>Nested two</p></li></ol></li></ul>"
    ));
    assert!(html.contains(
        "<pre><code class=\"language-rust\">fn main() {\n    println!(&quot;hi&quot;);\n}</code></pre>"
    ));
    assert!(html.contains("<blockquote><p>Quoted words</p></blockquote>"));
    assert!(html.contains("<div class=\"panel panel-warning\"><p>Warning message</p></div>"));
    assert!(html.contains("<th><p>Name</p></th>"));
    assert!(html.contains("<td><p><span class=\"status status-green\">done</span></p></td>"));
    assert!(html.contains("<hr>"));
    assert!(html.ends_with("<p><span class=\"emoji\">:tada:</span> Shipped<br>next line</p>"));
    assert!(!html.contains("<!DOCTYPE"));
}

#[test]
fn test_kitchensink_standalone() {
    let html = HtmlFormat::default()
        .serialize(&fixture("kitchensink.json"))
        .unwrap();

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.contains("<title>ADF Document</title>"));
    for selector in [
        ".panel-info",
        ".panel-note",
        ".panel-warning",
        ".panel-error",
        ".panel-success",
        ".status-neutral",
        ".status-purple",
        ".status-blue",
        ".status-red",
        ".status-yellow",
        ".status-green",
    ] {
        assert!(html.contains(selector), "missing {}", selector);
    }
    assert!(html.contains("<h1>Sample Document</h1>"));
}

#[test]
fn test_heading_scenario() {
    let document = doc(json!({
        "type": "doc",
        "version": 1,
        "content": [{
            "type": "heading",
            "attrs": {"level": 1},
            "content": [{"type": "text", "text": "Sample Document"}]
        }]
    }));

    assert!(to_html(&document, true).contains("<h1>Sample Document</h1>"));
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

    assert_eq!(to_html(&document, false), "<h2>T</h2>");
}

#[test]
fn test_nested_marks() {
    let document = doc(json!({
        "type": "doc",
        "version": 1,
        "content": [{
            "type": "paragraph",
            "content": [
                {"type": "text", "text": "bold", "marks": [{"type": "strong"}]},
                {"type": "text", "text": " "},
                {"type": "text", "text": "Bold and italic", "marks": [{"type": "strong"}, {"type": "em"}]}
            ]
        }]
    }));

    let html = to_html(&document, false);
    insta::assert_snapshot!(html, @"<p><strong>bold</strong> <strong><em>Bold and italic</em></strong></p>");
}

#[test]
fn test_link_escaping() {
    let document = doc(json!({
        "type": "doc",
        "version": 1,
        "content": [{
            "type": "paragraph",
            "content": [{
                "type": "text",
                "text": "a/b",
                "marks": [{"type": "link", "attrs": {"href": "https://x.test/?a=1&b=\"2\"", "title": "it's"}}]
            }]
        }]
    }));

    assert_eq!(
        to_html(&document, false),
        "<p><a href=\"https://x.test/?a=1&amp;b=&quot;2&quot;\" title=\"it&#x27;s\">a&#x2F;b</a></p>"
    );
}

#[test]
fn test_empty_document_is_empty_even_with_styles() {
    let document = doc(json!({"type": "doc", "version": 1, "content": []}));
    assert_eq!(to_html(&document, true), "");
    assert_eq!(to_html(&document, false), "");
}

#[test]
fn test_registry_serializes_html() {
    let registry = FormatRegistry::with_defaults();
    let html = registry
        .serialize(&fixture("kitchensink.json"), "html")
        .unwrap();
    assert!(html.contains("<title>ADF Document</title>"));
    assert!(registry.parse("<p>x</p>", "html").is_err());
}
