//! Markdown serialization (ADF → Markdown export)
//!
//! Converts ADF documents to CommonMark Markdown by walking the tree once. Every node renders
//! to a string; block containers join their children with blank lines, inline containers
//! concatenate them.
//!
//! List depth is threaded through the recursion: a list item's marker is indented by two spaces
//! per level, and its children are rendered one level deeper.

use adf_core::{Document, Mark, MarkKind, Node, NodeKind};

const INDENT: &str = "  ";

/// Serialize an ADF document to Markdown
pub fn serialize_to_markdown(doc: &Document) -> String {
    render_blocks(&doc.root, 0)
}

fn render_node(node: &Node, depth: usize) -> String {
    match &node.kind {
        NodeKind::Doc => render_blocks(node, depth),
        NodeKind::Paragraph => render_inline(node, depth),
        NodeKind::Heading => {
            let level = node.heading_level().unwrap_or(1);
            format!("{} {}", "#".repeat(level), render_inline(node, depth))
        }
        NodeKind::Text => render_text(node),
        NodeKind::BulletList => render_list(node, depth, |_| "-".to_string()),
        NodeKind::OrderedList => render_list(node, depth, |index| format!("{}.", index + 1)),
        NodeKind::ListItem => render_list_item(node, "-", depth),
        NodeKind::Blockquote => quote(&render_blocks(node, depth)),
        NodeKind::CodeBlock => {
            let language = node.attr_text("language").unwrap_or_default();
            format!("```{}\n{}\n```", language, code_text(node))
        }
        NodeKind::Rule => "---".to_string(),
        NodeKind::Panel => {
            let panel_type = node
                .attr_text("panelType")
                .unwrap_or_else(|| "info".to_string());
            let header = format!(
                "> {} **{}**",
                panel_icon(&panel_type),
                panel_type.to_uppercase()
            );
            let body = render_blocks(node, depth);
            if body.is_empty() {
                header
            } else {
                format!("{}\n{}", header, quote(&body))
            }
        }
        NodeKind::Table => render_table(node),
        NodeKind::Status => {
            let text = node.attr_text("text").unwrap_or_default();
            format!("[{}]", text.to_uppercase())
        }
        NodeKind::Emoji => node.attr_text("shortName").unwrap_or_default(),
        NodeKind::HardBreak => "  \n".to_string(),
        other => {
            tracing::trace!(kind = %other, "no markdown mapping, emitting children");
            if node.content.is_some() {
                render_inline(node, depth)
            } else {
                node.text.clone().unwrap_or_default()
            }
        }
    }
}

/// Children separated by blank lines
fn render_blocks(node: &Node, depth: usize) -> String {
    node.children()
        .iter()
        .map(|child| render_node(child, depth))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Children concatenated
fn render_inline(node: &Node, depth: usize) -> String {
    node.children()
        .iter()
        .map(|child| render_node(child, depth))
        .collect()
}

fn render_list(list: &Node, depth: usize, marker: impl Fn(usize) -> String) -> String {
    list.children()
        .iter()
        .enumerate()
        .map(|(index, item)| match item.kind {
            NodeKind::ListItem => render_list_item(item, &marker(index), depth),
            _ => render_node(item, depth),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `{indent}{marker} {content}`; nested blocks start on their own line
fn render_list_item(item: &Node, marker: &str, depth: usize) -> String {
    let content = item
        .children()
        .iter()
        .map(|child| render_node(child, depth + 1))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}{} {}", INDENT.repeat(depth), marker, content)
}

fn render_table(table: &Node) -> String {
    let rows = table.children();
    let Some(header) = rows.first() else {
        return String::new();
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_row(header));
    lines.push(format!("|{}", "---|".repeat(header.children().len())));
    lines.extend(rows[1..].iter().map(render_row));
    lines.join("\n")
}

fn render_row(row: &Node) -> String {
    let cells: Vec<String> = row
        .children()
        .iter()
        .map(|cell| {
            render_inline(cell, 0)
                .replace('\n', " ")
                .replace('|', "\\|")
        })
        .collect();
    format!("|{}|", cells.join("|"))
}

fn render_text(node: &Node) -> String {
    let text = node.text.clone().unwrap_or_default();
    node.marks.iter().fold(text, apply_mark)
}

fn apply_mark(inner: String, mark: &Mark) -> String {
    match &mark.kind {
        MarkKind::Strong => format!("**{}**", inner),
        MarkKind::Em => format!("*{}*", inner),
        MarkKind::Strike => format!("~~{}~~", inner),
        MarkKind::Code => format!("`{}`", inner),
        MarkKind::Link => {
            let href = mark.attr_text("href").unwrap_or_else(|| "#".to_string());
            match mark.attr_text("title") {
                Some(title) => {
                    format!("[{}]({} \"{}\")", inner, href, title.replace('"', "\\\""))
                }
                None => format!("[{}]({})", inner, href),
            }
        }
        _ => inner,
    }
}

/// Raw text of a code block; hard breaks become newlines, marks are ignored
fn code_text(node: &Node) -> String {
    match node.kind {
        NodeKind::HardBreak => "\n".to_string(),
        _ => {
            let mut text = node.text.clone().unwrap_or_default();
            for child in node.children() {
                text.push_str(&code_text(child));
            }
            text
        }
    }
}

/// Prefix every line with `> `
fn quote(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("> {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn panel_icon(panel_type: &str) -> &'static str {
    match panel_type {
        "info" => "ℹ️",
        "note" => "📝",
        "warning" => "⚠️",
        "error" => "❌",
        "success" => "✅",
        _ => "📋",
    }
}
