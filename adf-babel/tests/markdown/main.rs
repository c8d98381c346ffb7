//! Markdown export tests

#[path = "../common/mod.rs"]
mod common;
mod export;
mod table;
