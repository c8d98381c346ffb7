//! Document tree model
//!
//!     The in-memory representation of an ADF document. This module holds data definitions only:
//!     validation lives in [`crate::validation`], emission in the `adf-babel` crate.
//!
//!     Layout:
//!     ├── kind.rs        Node and mark kind catalogs
//!     ├── node.rs        Node, Mark and attribute helpers
//!     └── document.rs    Document root

pub mod document;
pub mod kind;
pub mod node;

pub use document::{Document, ADF_VERSION};
pub use kind::{MarkKind, NodeFamily, NodeKind};
pub use node::{is_truthy, Attrs, Mark, Node};
