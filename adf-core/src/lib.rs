//! # adf-core
//!
//! Document tree model and structural validator for the Atlassian Document Format (ADF).
//!
//! ADF documents are JSON trees of typed nodes: paragraphs, headings, lists, tables, panels,
//! and text leaves decorated with marks (bold, italic, links, ...). This crate provides:
//!
//! - [`ast`]: the tree model, built leniently from any JSON value
//! - [`validation`]: the structural validator, run on the raw JSON
//! - [`loader`]: source text to [`ast::Document`], plus the fallback document shown for
//!   unreadable sources
//!
//! Converting documents to other formats is the job of the `adf-babel` crate.
//!
//! Every operation here is pure: no I/O, no global state, safe to call from any thread.

pub mod ast;
pub mod loader;
pub mod validation;

pub use ast::{Document, Mark, MarkKind, Node, NodeKind};
pub use validation::{validate, ValidationIssue, ValidationResult};
