use crate::common::doc;
use adf_babel::format::Format;
use adf_babel::formats::markdown::MarkdownFormat;
use comrak::nodes::NodeValue;
use comrak::{parse_document, Arena, Options};
use rstest::rstest;
use serde_json::{json, Value};

fn cell(kind: &str, text: &str) -> Value {
    json!({"type": kind, "content": [{"type": "paragraph", "content": [{"type": "text", "text": text}]}]})
}

fn row(cells: Vec<Value>) -> Value {
    json!({"type": "tableRow", "content": cells})
}

fn table(rows: Vec<Value>) -> String {
    let document = doc(json!({
        "type": "doc",
        "version": 1,
        "content": [{"type": "table", "content": rows}]
    }));
    MarkdownFormat
        .serialize(&document)
        .expect("Failed to serialize markdown")
}

#[test]
fn test_header_separator_and_rows() {
    let md = table(vec![
        row(vec![cell("tableHeader", "Header 1"), cell("tableHeader", "Header 2")]),
        row(vec![cell("tableCell", "Cell 1"), cell("tableCell", "Cell 2")]),
        row(vec![cell("tableCell", "Cell 3"), cell("tableCell", "Cell 4")]),
    ]);

    assert_eq!(
        md,
        "|Header 1|Header 2|\n|---|---|\n|Cell 1|Cell 2|\n|Cell 3|Cell 4|"
    );
}

#[test]
fn test_single_row_table_still_has_separator() {
    let md = table(vec![row(vec![cell("tableCell", "only")])]);
    assert_eq!(md, "|only|\n|---|");
}

#[test]
fn test_empty_table_renders_nothing() {
    assert_eq!(table(vec![]), "");
}

#[rstest]
#[case("a|b", "a\\|b")]
#[case("||", "\\|\\|")]
#[case("no pipes", "no pipes")]
fn test_pipes_are_escaped(#[case] text: &str, #[case] expected: &str) {
    let md = table(vec![row(vec![cell("tableCell", text)])]);
    let first_line = md.lines().next().unwrap();
    assert_eq!(first_line, format!("|{}|", expected));
}

#[test]
fn test_multi_paragraph_cell_stays_on_one_line() {
    let md = table(vec![row(vec![json!({
        "type": "tableCell",
        "content": [
            {"type": "paragraph", "content": [{"type": "text", "text": "one"}]},
            {"type": "paragraph", "content": [
                {"type": "text", "text": "two"},
                {"type": "hardBreak"},
                {"type": "text", "text": "three"}
            ]}
        ]
    })])]);

    assert_eq!(md.lines().count(), 2);
    assert!(md.starts_with("|onetwo   three|"));
}

#[test]
fn test_table_reparses_with_comrak() {
    let md = table(vec![
        row(vec![cell("tableHeader", "Name"), cell("tableHeader", "Value")]),
        row(vec![cell("tableCell", "pipe|inside"), cell("tableCell", "2")]),
    ]);

    let mut options = Options::default();
    options.extension.table = true;
    let arena = Arena::new();
    let root = parse_document(&arena, &md, &options);

    let table = root.first_child().expect("table node");
    assert!(matches!(table.data.borrow().value, NodeValue::Table(_)));

    let rows: Vec<_> = table.children().collect();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(row.children().count(), 2);
    }

    let texts: Vec<String> = root
        .descendants()
        .filter_map(|node| match &node.data.borrow().value {
            NodeValue::Text(text) => Some(text.to_string()),
            _ => None,
        })
        .collect();
    assert!(texts.concat().contains("pipe|inside"));
}
