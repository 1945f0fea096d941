use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Flat property map of a node. Insertion order is preserved.
pub type Props = serde_json::Map<String, Value>;

/// Element type tag
///
/// The schema format defines five types. Any other string read from JSON is
/// kept verbatim in [`NodeType::Unknown`] so renderers can degrade instead of
/// rejecting the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    Section,
    Heading,
    Text,
    Image,
    Button,
    Unknown(String),
}

impl NodeType {
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Section => "section",
            NodeType::Heading => "heading",
            NodeType::Text => "text",
            NodeType::Image => "image",
            NodeType::Button => "button",
            NodeType::Unknown(name) => name,
        }
    }
}

impl From<String> for NodeType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "section" => NodeType::Section,
            "heading" => NodeType::Heading,
            "text" => NodeType::Text,
            "image" => NodeType::Image,
            "button" => NodeType::Button,
            _ => NodeType::Unknown(value),
        }
    }
}

impl From<&str> for NodeType {
    fn from(value: &str) -> Self {
        NodeType::from(value.to_string())
    }
}

impl From<NodeType> for String {
    fn from(value: NodeType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of the page schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(default)]
    pub props: Props,

    #[serde(default)]
    pub children: Vec<SchemaNode>,
}

impl SchemaNode {
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            node_type,
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style prop setter
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<SchemaNode>) -> Self {
        self.children = children;
        self
    }

    /// String/number prop rendered as text, `None` when absent or empty
    pub fn display_prop(&self, key: &str) -> Option<String> {
        self.props
            .get(key)
            .and_then(prop_as_style_value)
            .filter(|value| !value.is_empty())
    }

    /// Number of nodes in this subtree, including `self`
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(SchemaNode::subtree_len).sum::<usize>()
    }
}

/// Text form of a prop value, for string and number values only
pub fn prop_as_style_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
