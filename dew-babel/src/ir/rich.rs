//! The rich-text tree written by the TipTap editor.
//!
//! Every node has a `type`, optional `attrs`, optional nested `content`, and `text`
//! nodes carry a `text` payload:
//!
//! ```json
//! { "type": "doc", "content": [
//!     { "type": "heading", "attrs": { "level": 2 },
//!       "content": [{ "type": "text", "text": "Wise Mind" }] } ] }
//! ```
//!
//! Node types the CMS does not model are kept as [`NodeKind::Other`] so that the
//! converter can still descend into them.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// The `type` of a rich-text node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Doc,
    Heading,
    Paragraph,
    BulletList,
    ListItem,
    Image,
    Callout,
    Activity,
    Text,
    /// Any node type the CMS does not model (e.g. `blockquote`, `footnote`).
    Other(String),
}

impl NodeKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "doc" => NodeKind::Doc,
            "heading" => NodeKind::Heading,
            "paragraph" => NodeKind::Paragraph,
            "bulletList" => NodeKind::BulletList,
            "listItem" => NodeKind::ListItem,
            "image" => NodeKind::Image,
            "callout" => NodeKind::Callout,
            "activity" => NodeKind::Activity,
            "text" => NodeKind::Text,
            other => NodeKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Doc => "doc",
            NodeKind::Heading => "heading",
            NodeKind::Paragraph => "paragraph",
            NodeKind::BulletList => "bulletList",
            NodeKind::ListItem => "listItem",
            NodeKind::Image => "image",
            NodeKind::Callout => "callout",
            NodeKind::Activity => "activity",
            NodeKind::Text => "text",
            NodeKind::Other(name) => name,
        }
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A node of the rich-text tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<RichNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl RichNode {
    pub fn new(kind: NodeKind) -> Self {
        RichNode {
            kind,
            attrs: None,
            content: None,
            text: None,
        }
    }

    /// The `doc` root holding `content`.
    pub fn doc(content: Vec<RichNode>) -> Self {
        RichNode::new(NodeKind::Doc).with_content(content)
    }

    /// A `text` leaf.
    pub fn text(text: impl Into<String>) -> Self {
        RichNode {
            text: Some(text.into()),
            ..RichNode::new(NodeKind::Text)
        }
    }

    pub fn with_attrs(mut self, attrs: Map<String, Value>) -> Self {
        self.attrs = Some(attrs);
        self
    }

    pub fn with_content(mut self, content: Vec<RichNode>) -> Self {
        self.content = Some(content);
        self
    }

    /// Child nodes; empty for leaves.
    pub fn children(&self) -> &[RichNode] {
        self.content.as_deref().unwrap_or_default()
    }

    pub fn attrs(&self) -> Option<&Map<String, Value>> {
        self.attrs.as_ref()
    }

    /// Builds a node from editor JSON.
    ///
    /// Returns `None` for anything that is not an object. A missing `type` reads as an
    /// unmodeled node, a non-object `attrs` is ignored and a non-list `content` is treated
    /// as absent; child entries that are not objects are skipped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let kind = NodeKind::from_name(object.get("type").and_then(Value::as_str).unwrap_or(""));
        let attrs = object.get("attrs").and_then(Value::as_object).cloned();
        let content = object
            .get("content")
            .and_then(Value::as_array)
            .map(|children| children.iter().filter_map(RichNode::from_value).collect());
        let text = object
            .get("text")
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(RichNode {
            kind,
            attrs,
            content,
            text,
        })
    }

    pub fn to_value(&self) -> Value {
        super::to_json(self)
    }
}
