//! Serializable editor events.
//!
//! A UI forwards user gestures as [`EditorEvent`]s instead of calling the
//! [`Editor`] methods directly. The wire form is internally tagged:
//!
//! ```json
//! { "kind": "dragStart", "nodeType": "heading" }
//! { "kind": "drop", "targetId": "root-section-1" }
//! { "kind": "keyDelete" }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use webbuilder_schema::NodeType;

use crate::palette::template;
use crate::{Editor, EditorError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EditorEvent {
    /// Pick up a palette element
    DragStart { node_type: NodeType },

    /// Release the picked-up element, optionally onto a node
    Drop {
        #[serde(default)]
        target_id: Option<String>,
    },

    /// Click a node, or the empty canvas
    Select {
        #[serde(default)]
        node_id: Option<String>,
    },

    /// Edit a field in the properties panel
    PatchProp { key: String, value: Value },

    /// The "Delete Element" button
    DeleteSelected,

    /// The Delete key pressed on the canvas
    KeyDelete,
}

impl EditorEvent {
    /// Apply the event, returning the id of a node it created
    pub fn apply(self, editor: &mut Editor) -> Result<Option<String>, EditorError> {
        match self {
            EditorEvent::DragStart { node_type } => {
                let template = template(&node_type)
                    .ok_or_else(|| EditorError::UnknownTemplate(node_type.to_string()))?;
                editor.drag_start(&template);
                Ok(None)
            }

            EditorEvent::Drop { target_id } => editor.drop(target_id.as_deref()),

            EditorEvent::Select { node_id } => {
                editor.select_node(node_id.as_deref());
                Ok(None)
            }

            EditorEvent::PatchProp { key, value } => {
                editor.patch_prop(&key, value);
                Ok(None)
            }

            EditorEvent::DeleteSelected | EditorEvent::KeyDelete => {
                editor.delete_selected();
                Ok(None)
            }
        }
    }
}

impl Editor {
    /// Apply a single event
    pub fn dispatch(&mut self, event: EditorEvent) -> Result<Option<String>, EditorError> {
        event.apply(self)
    }

    /// Parse and apply an event in its JSON form
    pub fn dispatch_json(&mut self, event: &str) -> Result<Option<String>, EditorError> {
        let event: EditorEvent = serde_json::from_str(event)?;
        self.dispatch(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INITIAL_ROOT_ID;

    #[test]
    fn test_wire_format() {
        let event: EditorEvent =
            serde_json::from_str(r#"{ "kind": "dragStart", "nodeType": "image" }"#).unwrap();
        assert_eq!(event, EditorEvent::DragStart { node_type: NodeType::Image });

        let event: EditorEvent = serde_json::from_str(r#"{ "kind": "drop" }"#).unwrap();
        assert_eq!(event, EditorEvent::Drop { target_id: None });

        let json = serde_json::to_value(EditorEvent::DeleteSelected).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "deleteSelected" }));
    }

    #[test]
    fn test_delete_key_deletes_selection() {
        let mut editor = Editor::new();
        editor
            .dispatch(EditorEvent::Select {
                node_id: Some(INITIAL_ROOT_ID.to_string()),
            })
            .unwrap();

        editor.dispatch_json(r#"{ "kind": "keyDelete" }"#).unwrap();
        assert!(editor.forest().is_empty());

        // nothing selected any more
        editor.dispatch(EditorEvent::KeyDelete).unwrap();
        assert!(editor.forest().is_empty());
    }

    #[test]
    fn test_unknown_template() {
        let mut editor = Editor::new();
        let err = editor
            .dispatch_json(r#"{ "kind": "dragStart", "nodeType": "video" }"#)
            .unwrap_err();
        assert!(matches!(err, EditorError::UnknownTemplate(t) if t == "video"));
    }
}
