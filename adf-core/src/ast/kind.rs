//! Node and mark kinds
//!
//!     The type tags of an ADF document are a closed set. Each tag maps to one variant here;
//!     anything else is kept verbatim in an `Unknown` variant so that documents using
//!     undocumented extensions survive a load/serialize cycle untouched.
//!
//!     The string tags are a wire contract shared with every other ADF producer, so `as_str`
//!     must always return exactly the tag that was parsed.

use std::fmt;

/// Type tag of a [`Node`](super::Node)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Doc,
    Paragraph,
    Heading,
    Text,
    BulletList,
    OrderedList,
    ListItem,
    Blockquote,
    CodeBlock,
    Rule,
    Panel,
    Table,
    TableRow,
    TableCell,
    TableHeader,
    Status,
    Emoji,
    Mention,
    InlineCard,
    Media,
    MediaGroup,
    MediaSingle,
    HardBreak,
    /// A tag outside the catalog. An empty string means the node had no usable type.
    Unknown(String),
}

/// Validation family a node kind belongs to
///
/// Each family has its own attribute rules, see `validation::rules`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeFamily {
    Block,
    Text,
    Inline,
    Structural,
    Media,
    /// Attribute-free inline leaves (hard breaks)
    Break,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "doc" => NodeKind::Doc,
            "paragraph" => NodeKind::Paragraph,
            "heading" => NodeKind::Heading,
            "text" => NodeKind::Text,
            "bulletList" => NodeKind::BulletList,
            "orderedList" => NodeKind::OrderedList,
            "listItem" => NodeKind::ListItem,
            "blockquote" => NodeKind::Blockquote,
            "codeBlock" => NodeKind::CodeBlock,
            "rule" => NodeKind::Rule,
            "panel" => NodeKind::Panel,
            "table" => NodeKind::Table,
            "tableRow" => NodeKind::TableRow,
            "tableCell" => NodeKind::TableCell,
            "tableHeader" => NodeKind::TableHeader,
            "status" => NodeKind::Status,
            "emoji" => NodeKind::Emoji,
            "mention" => NodeKind::Mention,
            "inlineCard" => NodeKind::InlineCard,
            "media" => NodeKind::Media,
            "mediaGroup" => NodeKind::MediaGroup,
            "mediaSingle" => NodeKind::MediaSingle,
            "hardBreak" => NodeKind::HardBreak,
            other => NodeKind::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Doc => "doc",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading => "heading",
            NodeKind::Text => "text",
            NodeKind::BulletList => "bulletList",
            NodeKind::OrderedList => "orderedList",
            NodeKind::ListItem => "listItem",
            NodeKind::Blockquote => "blockquote",
            NodeKind::CodeBlock => "codeBlock",
            NodeKind::Rule => "rule",
            NodeKind::Panel => "panel",
            NodeKind::Table => "table",
            NodeKind::TableRow => "tableRow",
            NodeKind::TableCell => "tableCell",
            NodeKind::TableHeader => "tableHeader",
            NodeKind::Status => "status",
            NodeKind::Emoji => "emoji",
            NodeKind::Mention => "mention",
            NodeKind::InlineCard => "inlineCard",
            NodeKind::Media => "media",
            NodeKind::MediaGroup => "mediaGroup",
            NodeKind::MediaSingle => "mediaSingle",
            NodeKind::HardBreak => "hardBreak",
            NodeKind::Unknown(tag) => tag,
        }
    }

    /// The validation family, or `None` for kinds that are not valid below the root
    /// (`doc` and unknown tags).
    pub fn family(&self) -> Option<NodeFamily> {
        match self {
            NodeKind::Paragraph
            | NodeKind::Heading
            | NodeKind::BulletList
            | NodeKind::OrderedList
            | NodeKind::Blockquote
            | NodeKind::CodeBlock
            | NodeKind::Panel
            | NodeKind::Rule
            | NodeKind::Table => Some(NodeFamily::Block),
            NodeKind::Text => Some(NodeFamily::Text),
            NodeKind::Emoji | NodeKind::Mention | NodeKind::InlineCard | NodeKind::Status => {
                Some(NodeFamily::Inline)
            }
            NodeKind::ListItem | NodeKind::TableRow | NodeKind::TableCell | NodeKind::TableHeader => {
                Some(NodeFamily::Structural)
            }
            NodeKind::Media | NodeKind::MediaGroup | NodeKind::MediaSingle => {
                Some(NodeFamily::Media)
            }
            NodeKind::HardBreak => Some(NodeFamily::Break),
            NodeKind::Doc | NodeKind::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, NodeKind::Unknown(_))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type tag of a [`Mark`](super::Mark)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarkKind {
    Strong,
    Em,
    Underline,
    Strike,
    Code,
    Link,
    TextColor,
    BackgroundColor,
    Subsup,
    Unknown(String),
}

impl MarkKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "strong" => MarkKind::Strong,
            "em" => MarkKind::Em,
            "underline" => MarkKind::Underline,
            "strike" => MarkKind::Strike,
            "code" => MarkKind::Code,
            "link" => MarkKind::Link,
            "textColor" => MarkKind::TextColor,
            "backgroundColor" => MarkKind::BackgroundColor,
            "subsup" => MarkKind::Subsup,
            other => MarkKind::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MarkKind::Strong => "strong",
            MarkKind::Em => "em",
            MarkKind::Underline => "underline",
            MarkKind::Strike => "strike",
            MarkKind::Code => "code",
            MarkKind::Link => "link",
            MarkKind::TextColor => "textColor",
            MarkKind::BackgroundColor => "backgroundColor",
            MarkKind::Subsup => "subsup",
            MarkKind::Unknown(tag) => tag,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, MarkKind::Unknown(_))
    }
}

impl fmt::Display for MarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
