//! HTML format implementation
//!
//! Strategy: direct ADF tree → HTML string generation (one-way only)
//!
//! # Data Model
//!
//! | ADF Node               | HTML Element                               | Notes                        |
//! |------------------------|--------------------------------------------|------------------------------|
//! | paragraph              | `<p>`                                      |                              |
//! | heading                | `<h1>`-`<h6>`                              | level 1 when missing/invalid |
//! | bulletList/orderedList | `<ul>` / `<ol>`                            |                              |
//! | listItem               | `<li>`                                     |                              |
//! | blockquote             | `<blockquote>`                             |                              |
//! | codeBlock              | `<pre><code class="language-X">`           | class only with a language   |
//! | rule                   | `<hr>`                                     |                              |
//! | panel                  | `<div class="panel panel-X">`              | `info` by default            |
//! | table/row/cell/header  | `<table>` `<tr>` `<td>` `<th>`             | colspan/rowspan when present |
//! | status                 | `<span class="status status-X">`           | `neutral` by default         |
//! | emoji                  | `<span class="emoji">`                     | short name as label          |
//! | hardBreak              | `<br>`                                     |                              |
//!
//! Anything else renders its children (or its escaped text) with no wrapper.
//!
//! # Marks
//!
//! Marks wrap the escaped text one tag at a time, walking the mark list backwards: the first
//! mark ends up as the outermost tag. `strong`+`em` therefore gives `<strong><em>…</em></strong>`.
//!
//! # Design Decisions
//!
//! - **String building**: the output is built directly into a `String`; the escaping rules
//!   (`& < > " ' /`) are stricter than what a DOM serializer would produce.
//! - **Standalone documents**: with `include_styles` the fragment is wrapped in a complete HTML
//!   document with an embedded stylesheet. An empty document stays an empty string.
//! - **Leniency**: rendering never fails; missing attributes fall back to defaults.

mod serializer;

pub use serializer::{escape_html, serialize_to_html};

use crate::error::FormatError;
use crate::format::Format;
use adf_core::Document;

/// Title used for standalone documents unless configured otherwise
pub const DEFAULT_TITLE: &str = "ADF Document";

/// Options for HTML output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Wrap the fragment in a complete document with the embedded stylesheet
    pub include_styles: bool,
    /// `<title>` of the standalone document
    pub title: String,
}

impl HtmlOptions {
    /// Options producing a bare fragment
    pub fn fragment() -> Self {
        Self {
            include_styles: false,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            include_styles: true,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// HTML format with configurable options
///
/// Generates HTML5 from ADF documents. This is a one-way serialization format only.
#[derive(Debug, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 fragment or standalone page"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        false // HTML to ADF is not supported
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_html(doc, &self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adf_core::{Node, NodeKind};

    #[test]
    fn test_html_format_name() {
        let format = HtmlFormat::default();
        assert_eq!(format.name(), "html");
    }

    #[test]
    fn test_html_format_capabilities() {
        let format = HtmlFormat::default();
        assert!(!format.supports_parsing());
        assert!(format.supports_serialization());
    }

    #[test]
    fn test_html_format_extensions() {
        let format = HtmlFormat::default();
        assert_eq!(format.file_extensions(), &["html", "htm"]);
    }

    #[test]
    fn test_html_format_uses_its_options() {
        let doc = Document::new(vec![Node::new(NodeKind::Rule)]);

        let fragment = HtmlFormat::new(HtmlOptions::fragment())
            .serialize(&doc)
            .unwrap();
        assert_eq!(fragment, "<hr>");

        let page = HtmlFormat::new(HtmlOptions::default().with_title("Release notes"))
            .serialize(&doc)
            .unwrap();
        assert!(page.contains("<title>Release notes</title>"));
    }

    #[test]
    fn test_parse_not_supported() {
        let result = HtmlFormat::default().parse("<p>hi</p>");
        assert!(matches!(result, Err(FormatError::NotSupported(_))));
    }
}
