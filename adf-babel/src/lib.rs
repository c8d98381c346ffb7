//! Multi-format interoperability for ADF documents
//!
//!     This crate provides a uniform interface for converting ADF document trees to and from
//!     text formats (HTML, Markdown, ADF JSON).
//!
//! Architecture
//!
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!     - Format implementations: Concrete implementations for each supported format
//!
//!     This is a pure lib, that is, it powers the adf cli but is shell agnostic: no code should
//!     suppose a shell environment, be it printing to std streams, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── serializer.rs   # Serializer implementation
//!     │   │   └── mod.rs
//!     ├── lib.rs
//!
//! Testing
//!     tests
//!     ├── <format>
//!     │   ├── main.rs
//!     │   └── <testname>.rs
//!     └── fixtures
//!         └── <docname>.json
//!
//! note that rust does not by default discover tests in subdirectories, so each format directory
//! has a main.rs that includes its test modules.
//!
//! Lossiness
//!
//!     Both HTML and Markdown are export-only. Markdown in particular cannot express panels,
//!     statuses or text colors, which are approximated (see the markdown module docs). Converters
//!     never fail on the shape of a tree: they accept unvalidated documents and fall back to
//!     rendering children for anything they do not recognize.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use formats::{HtmlFormat, HtmlOptions, JsonFormat, MarkdownFormat};
pub use registry::FormatRegistry;

use adf_core::Document;

/// Render a document as HTML, standalone with the embedded stylesheet or as a bare fragment.
pub fn to_html(doc: &Document, include_styles: bool) -> String {
    let options = HtmlOptions {
        include_styles,
        ..HtmlOptions::default()
    };
    formats::html::serialize_to_html(doc, &options)
}

/// Render a document as Markdown.
pub fn to_markdown(doc: &Document) -> String {
    formats::markdown::serialize_to_markdown(doc)
}
