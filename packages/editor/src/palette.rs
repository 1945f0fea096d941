//! The element templates a user can drag onto the canvas.

use serde::{Deserialize, Serialize};
use serde_json::json;
use webbuilder_schema::{NodeType, Props};

/// A draggable element kind and the props new instances start with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementTemplate {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub label: String,
    pub default_props: Props,
}

impl ElementTemplate {
    fn new(node_type: NodeType, label: &str, default_props: serde_json::Value) -> Self {
        Self {
            node_type,
            label: label.to_string(),
            default_props: match default_props {
                serde_json::Value::Object(map) => map,
                _ => Props::new(),
            },
        }
    }
}

/// The five built-in templates, in palette order
pub fn palette() -> Vec<ElementTemplate> {
    vec![
        ElementTemplate::new(
            NodeType::Section,
            "Section",
            json!({ "padding": "20px", "margin": "10px" }),
        ),
        ElementTemplate::new(
            NodeType::Heading,
            "Heading",
            json!({ "text": "Heading", "fontSize": "24px", "fontWeight": "bold" }),
        ),
        ElementTemplate::new(
            NodeType::Text,
            "Text",
            json!({ "text": "Sample text content", "fontSize": "16px" }),
        ),
        ElementTemplate::new(
            NodeType::Image,
            "Image",
            json!({ "src": "https://placehold.co/300x200", "alt": "Placeholder image" }),
        ),
        ElementTemplate::new(
            NodeType::Button,
            "Button",
            json!({
                "text": "Button",
                "padding": "10px 20px",
                "backgroundColor": "#3b82f6",
                "color": "#ffffff"
            }),
        ),
    ]
}

/// Look up the palette template for a node type
pub fn template(node_type: &NodeType) -> Option<ElementTemplate> {
    palette().into_iter().find(|t| &t.node_type == node_type)
}
