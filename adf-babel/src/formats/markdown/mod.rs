//! Markdown format implementation
//!
//! Data Model:
//!
//!     ADF being more expressive than markdown, a few constructs are approximated.
//!     | ADF          | Markdown                      | Notes                                   |
//!     | heading      | ATX heading `#`..`######`      | level 1 when missing or out of range    |
//!     | lists        | `- ` / `1. `                   | ordered lists always count from 1       |
//!     | blockquote   | `> ` on every line             |                                         |
//!     | panel        | blockquote with an icon header | `> ⚠️ **WARNING**`                       |
//!     | codeBlock    | fenced block                   | the language is the info string         |
//!     | table        | pipe table                     | the first row is always the header      |
//!     | status       | `[TEXT]`                       | upper-cased, color is lost              |
//!     | emoji        | its short name                 | `:smile:`                               |
//!
//!     Underline and text color have no markdown counterpart and are dropped, keeping the text.
//!
//! Library
//!
//!     Output is generated by direct string building. The emitted text is CommonMark with the
//!  GFM table and strikethrough extensions; the tests re-parse it with comrak to check that the
//!  structure survives.
//!
//!
//! Direction
//!
//!     Only serialization is supported. Turning markdown into an ADF tree is left to external
//!  tools.

mod serializer;

pub use serializer::serialize_to_markdown;

use crate::error::FormatError;
use crate::format::Format;
use adf_core::Document;

/// Markdown format (export only)
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown with pipe tables"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_markdown(doc))
    }
}
