//! HTML export tests

#[path = "../common/mod.rs"]
mod common;
mod export;
