//! Document root
//!
//!     An ADF document is a `doc` node carrying a version tag next to its content:
//!
//!         {"type": "doc", "version": 1, "content": [ ...block nodes... ]}
//!
//!     The root is kept as a regular [`Node`] so that converters can dispatch on it like on any
//!     other node. A document loaded from arbitrary JSON may have a root of another kind; the
//!     converters simply render whatever the root is.

use super::kind::NodeKind;
use super::node::Node;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only document version in existence
pub const ADF_VERSION: u64 = 1;

/// A complete ADF document
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "Value", into = "Value")]
pub struct Document {
    /// Version tag as found in the source, `None` when missing or not an integer
    pub version: Option<u64>,
    pub root: Node,
}

impl Document {
    /// A version 1 document with the given block content
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            version: Some(ADF_VERSION),
            root: Node::new(NodeKind::Doc).with_content(content),
        }
    }

    /// Build a document from any JSON value without failing
    pub fn from_value(value: Value) -> Self {
        let version = value.get("version").and_then(Value::as_u64);
        Self {
            version,
            root: Node::from(value),
        }
    }

    /// Top-level block nodes
    pub fn content(&self) -> &[Node] {
        self.root.children()
    }

    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }

    /// Whether the root carries the `doc` tag
    pub fn has_doc_root(&self) -> bool {
        self.root.kind == NodeKind::Doc
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        let mut value = Value::from(doc.root);
        if let (Some(version), Value::Object(obj)) = (doc.version, &mut value) {
            // Keep `version` right after `type`, where every ADF producer puts it.
            let mut ordered = serde_json::Map::new();
            if let Some(kind) = obj.remove("type") {
                ordered.insert("type".to_string(), kind);
            }
            ordered.insert("version".to_string(), Value::from(version));
            ordered.append(obj);
            *obj = ordered;
        }
        value
    }
}
