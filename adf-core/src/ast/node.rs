//! Nodes and marks
//!
//!     A [`Node`] is the universal unit of the document tree: a kind tag, a bag of attributes,
//!     optional children, and for text leaves the text payload and its marks.
//!
//!     Conversion from JSON is lenient on purpose. Converters must accept documents that never
//!     went through validation, so every JSON value becomes *some* node: fields of the wrong
//!     shape are treated as absent instead of failing the whole load. Whether a tree is
//!     well-formed is the validator's question, answered on the raw JSON.

use super::kind::{MarkKind, NodeKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Node and mark attributes, as found in the `attrs` object
pub type Attrs = Map<String, Value>;

/// Whether a JSON value counts as present.
///
/// `null`, `false`, `0`, `NaN` and the empty string are treated as absent, arrays and objects
/// always count as present. Attribute checks throughout the crate use this rule.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a scalar attribute the way it should appear in emitted text.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// An inline decoration attached to a text node
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "Value", into = "Value")]
pub struct Mark {
    pub kind: MarkKind,
    pub attrs: Attrs,
}

impl Mark {
    pub fn new(kind: MarkKind) -> Self {
        Self {
            kind,
            attrs: Attrs::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// The attribute as text, if it is present and truthy
    pub fn attr_text(&self, key: &str) -> Option<String> {
        self.attrs
            .get(key)
            .filter(|v| is_truthy(v))
            .map(scalar_text)
    }
}

impl From<Value> for Mark {
    fn from(value: Value) -> Self {
        let mut obj = match value {
            Value::Object(obj) => obj,
            _ => Map::new(),
        };
        let kind = match obj.remove("type") {
            Some(Value::String(tag)) => MarkKind::from_tag(&tag),
            _ => MarkKind::Unknown(String::new()),
        };
        let attrs = match obj.remove("attrs") {
            Some(Value::Object(attrs)) => attrs,
            _ => Attrs::new(),
        };
        Mark { kind, attrs }
    }
}

impl From<Mark> for Value {
    fn from(mark: Mark) -> Self {
        let mut obj = Map::new();
        obj.insert("type".to_string(), Value::String(mark.kind.as_str().to_string()));
        if !mark.attrs.is_empty() {
            obj.insert("attrs".to_string(), Value::Object(mark.attrs));
        }
        Value::Object(obj)
    }
}

/// A node of the document tree
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "Value", into = "Value")]
pub struct Node {
    pub kind: NodeKind,
    pub attrs: Attrs,
    /// Children. `None` for leaves; `Some(vec![])` is an explicitly empty container.
    pub content: Option<Vec<Node>>,
    /// Text payload, only meaningful on text leaves
    pub text: Option<String>,
    pub marks: Vec<Mark>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: Attrs::new(),
            content: None,
            text: None,
            marks: Vec::new(),
        }
    }

    /// A text leaf
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(NodeKind::Text)
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_content(mut self, content: Vec<Node>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_marks(mut self, marks: Vec<Mark>) -> Self {
        self.marks = marks;
        self
    }

    /// Children of the node, empty for leaves
    pub fn children(&self) -> &[Node] {
        self.content.as_deref().unwrap_or(&[])
    }

    /// The raw attribute value, if present and truthy
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key).filter(|v| is_truthy(v))
    }

    /// The attribute as text, if present and truthy
    pub fn attr_text(&self, key: &str) -> Option<String> {
        self.attr(key).map(scalar_text)
    }

    /// Heading level, when it is a whole number in 1..=6 (`2` and `2.0` alike)
    pub fn heading_level(&self) -> Option<usize> {
        self.attrs
            .get("level")
            .and_then(Value::as_f64)
            .filter(|level| level.fract() == 0.0 && (1.0..=6.0).contains(level))
            .map(|level| level as usize)
    }

    /// Concatenated text of every text leaf below (and including) this node, marks ignored
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in self.children() {
            child.collect_text(out);
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        let mut obj = match value {
            Value::Object(obj) => obj,
            _ => Map::new(),
        };
        let kind = match obj.remove("type") {
            Some(Value::String(tag)) => NodeKind::from_tag(&tag),
            _ => NodeKind::Unknown(String::new()),
        };
        let attrs = match obj.remove("attrs") {
            Some(Value::Object(attrs)) => attrs,
            _ => Attrs::new(),
        };
        let content = match obj.remove("content") {
            Some(Value::Array(items)) => Some(items.into_iter().map(Node::from).collect()),
            _ => None,
        };
        let text = match obj.remove("text") {
            Some(Value::String(text)) => Some(text),
            _ => None,
        };
        let marks = match obj.remove("marks") {
            Some(Value::Array(marks)) => marks
                .into_iter()
                .filter(Value::is_object)
                .map(Mark::from)
                .collect(),
            _ => Vec::new(),
        };
        Node {
            kind,
            attrs,
            content,
            text,
            marks,
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        let mut obj = Map::new();
        obj.insert("type".to_string(), Value::String(node.kind.as_str().to_string()));
        if !node.attrs.is_empty() {
            obj.insert("attrs".to_string(), Value::Object(node.attrs));
        }
        if let Some(content) = node.content {
            obj.insert(
                "content".to_string(),
                Value::Array(content.into_iter().map(Value::from).collect()),
            );
        }
        if let Some(text) = node.text {
            obj.insert("text".to_string(), Value::String(text));
        }
        if !node.marks.is_empty() {
            obj.insert(
                "marks".to_string(),
                Value::Array(node.marks.into_iter().map(Value::from).collect()),
            );
        }
        Value::Object(obj)
    }
}
