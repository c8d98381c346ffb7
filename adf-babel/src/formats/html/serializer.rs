//! HTML serialization (ADF → HTML export)
//!
//! Converts ADF documents to HTML5, optionally wrapped in a standalone page with embedded CSS.
//! Pipeline: ADF tree → HTML fragment → (optional) complete HTML document

use super::HtmlOptions;
use adf_core::{Document, Mark, MarkKind, Node, NodeKind};
use std::fmt::Write;

/// Serialize an ADF document to HTML with the given options
pub fn serialize_to_html(doc: &Document, options: &HtmlOptions) -> String {
    // Step 1: ADF tree → HTML fragment
    let mut fragment = String::new();
    write_children(&doc.root, &mut fragment);

    // Step 2: Wrap in complete HTML document with CSS
    if !options.include_styles || fragment.is_empty() {
        return fragment;
    }
    wrap_in_document(&fragment, &options.title)
}

fn write_children(node: &Node, out: &mut String) {
    for child in node.children() {
        write_node(child, out);
    }
}

/// Emit `<tag>children</tag>`
fn write_element(tag: &str, node: &Node, out: &mut String) {
    let _ = write!(out, "<{}>", tag);
    write_children(node, out);
    let _ = write!(out, "</{}>", tag);
}

fn write_node(node: &Node, out: &mut String) {
    match &node.kind {
        NodeKind::Paragraph => write_element("p", node, out),
        NodeKind::Heading => {
            let tag = format!("h{}", node.heading_level().unwrap_or(1));
            write_element(&tag, node, out);
        }
        NodeKind::Text => out.push_str(&render_text(node)),
        NodeKind::BulletList => write_element("ul", node, out),
        NodeKind::OrderedList => write_element("ol", node, out),
        NodeKind::ListItem => write_element("li", node, out),
        NodeKind::Blockquote => write_element("blockquote", node, out),
        NodeKind::CodeBlock => {
            match node.attr_text("language") {
                Some(language) => {
                    let _ = write!(
                        out,
                        "<pre><code class=\"language-{}\">",
                        escape_attribute(&language)
                    );
                }
                None => out.push_str("<pre><code>"),
            }
            write_children(node, out);
            out.push_str("</code></pre>");
        }
        NodeKind::Rule => out.push_str("<hr>"),
        NodeKind::Panel => {
            let panel_type = node
                .attr_text("panelType")
                .unwrap_or_else(|| "info".to_string());
            let _ = write!(
                out,
                "<div class=\"panel panel-{}\">",
                escape_attribute(&panel_type)
            );
            write_children(node, out);
            out.push_str("</div>");
        }
        NodeKind::Table => write_element("table", node, out),
        NodeKind::TableRow => write_element("tr", node, out),
        NodeKind::TableCell => write_cell("td", node, out),
        NodeKind::TableHeader => write_cell("th", node, out),
        NodeKind::Status => {
            let text = node.attr_text("text").unwrap_or_default();
            let color = node
                .attr_text("color")
                .unwrap_or_else(|| "neutral".to_string());
            let _ = write!(
                out,
                "<span class=\"status status-{}\">{}</span>",
                escape_attribute(&color),
                escape_html(&text)
            );
        }
        NodeKind::Emoji => {
            let short_name = node.attr_text("shortName").unwrap_or_default();
            let _ = write!(out, "<span class=\"emoji\">{}</span>", escape_html(&short_name));
        }
        NodeKind::HardBreak => out.push_str("<br>"),
        other => {
            tracing::trace!(kind = %other, "no HTML mapping, emitting children");
            if node.content.is_some() {
                write_children(node, out);
            } else if let Some(text) = &node.text {
                out.push_str(&escape_html(text));
            }
        }
    }
}

fn write_cell(tag: &str, node: &Node, out: &mut String) {
    let _ = write!(out, "<{}", tag);
    for key in ["colspan", "rowspan"] {
        if let Some(value) = node.attr_text(key) {
            let _ = write!(out, " {}=\"{}\"", key, escape_attribute(&value));
        }
    }
    out.push('>');
    write_children(node, out);
    let _ = write!(out, "</{}>", tag);
}

/// Escaped text wrapped in its marks. The first mark ends up outermost.
fn render_text(node: &Node) -> String {
    let text = escape_html(node.text.as_deref().unwrap_or_default());
    node.marks
        .iter()
        .rev()
        .fold(text, |inner, mark| apply_mark(mark, inner))
}

fn apply_mark(mark: &Mark, inner: String) -> String {
    match &mark.kind {
        MarkKind::Strong => format!("<strong>{}</strong>", inner),
        MarkKind::Em => format!("<em>{}</em>", inner),
        MarkKind::Underline => format!("<u>{}</u>", inner),
        MarkKind::Strike => format!("<s>{}</s>", inner),
        MarkKind::Code => format!("<code>{}</code>", inner),
        MarkKind::Link => {
            let href = mark.attr_text("href").unwrap_or_else(|| "#".to_string());
            let title = mark
                .attr_text("title")
                .map(|title| format!(" title=\"{}\"", escape_html(&title)))
                .unwrap_or_default();
            format!("<a href=\"{}\"{}>{}</a>", escape_attribute(&href), title, inner)
        }
        MarkKind::TextColor => {
            let color = mark
                .attr_text("color")
                .unwrap_or_else(|| "inherit".to_string());
            format!(
                "<span style=\"color: {}\">{}</span>",
                escape_attribute(&color),
                inner
            )
        }
        _ => inner,
    }
}

/// Escape text content: `& < > " ' /`
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape a value placed inside a double-quoted attribute. URLs keep their slashes.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap an HTML fragment in a complete HTML document with the embedded stylesheet
fn wrap_in_document(body_html: &str, title: &str) -> String {
    let css = include_str!("../../../css/adf.css");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{}</title>
  <style>
{}
  </style>
</head>
<body>
  {}
</body>
</html>"#,
        escape_html(title),
        css.trim_end(),
        body_html
    )
}
