//! # Editor State
//!
//! The builder canvas as a small state machine over a [`SchemaArena`].
//!
//! ```text
//! drag_start(template) → staged node
//! drop(target?)        → staged node becomes a root or the target's last child
//! select_node(id?)     → selection
//! patch_prop(k, v)     → selected node's props
//! delete_selected()    → selected subtree removed, selection cleared
//! ```
//!
//! Every transition is synchronous and leaves the arena consistent.

use serde_json::Value;
use tracing::{debug, info};
use webbuilder_compiler_html::render_preview;
use webbuilder_schema::{Forest, IdGenerator, NodeType, SchemaNode};

use crate::arena::SchemaArena;
use crate::palette::ElementTemplate;
use crate::EditorError;

/// Id of the section every new document starts with
pub const INITIAL_ROOT_ID: &str = "root-section-1";

#[derive(Debug)]
pub struct Editor {
    arena: SchemaArena,
    staged: Option<SchemaNode>,
    selected: Option<String>,
    ids: IdGenerator,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Editor holding the initial document: one empty root section
    pub fn new() -> Self {
        let root = SchemaNode::new(INITIAL_ROOT_ID, NodeType::Section)
            .with_prop("padding", "20px")
            .with_prop("margin", "10px")
            .with_prop("backgroundColor", "#f9fafb");

        let mut arena = SchemaArena::new();
        arena.push_root(root);

        Self::with_arena(arena)
    }

    /// Editor over an existing forest
    pub fn from_forest(nodes: &[SchemaNode]) -> Result<Self, EditorError> {
        Ok(Self::with_arena(SchemaArena::from_forest(nodes)?))
    }

    fn with_arena(arena: SchemaArena) -> Self {
        Self {
            arena,
            staged: None,
            selected: None,
            ids: IdGenerator::new("editor"),
        }
    }

    pub fn arena(&self) -> &SchemaArena {
        &self.arena
    }

    /// Current forest, nested
    pub fn forest(&self) -> Forest {
        self.arena.to_forest()
    }

    /// Stage a new node built from `template`
    ///
    /// Replaces anything already staged.
    pub fn drag_start(&mut self, template: &ElementTemplate) -> &SchemaNode {
        let id = self.fresh_id(&template.node_type);
        debug!(node_id = %id, node_type = %template.node_type, "Drag started");

        self.staged.insert(SchemaNode {
            id,
            node_type: template.node_type.clone(),
            props: template.default_props.clone(),
            children: Vec::new(),
        })
    }

    pub fn staged(&self) -> Option<&SchemaNode> {
        self.staged.as_ref()
    }

    /// Commit the staged node, returning its id
    ///
    /// Without a target the node becomes the last root, otherwise the last
    /// child of `target_id`. Returns `Ok(None)` when nothing is staged. The
    /// staged node is consumed even when the target does not exist.
    pub fn drop(&mut self, target_id: Option<&str>) -> Result<Option<String>, EditorError> {
        let Some(node) = self.staged.take() else {
            return Ok(None);
        };

        let parent = match target_id {
            Some(target) => Some(
                self.arena
                    .find(target)
                    .ok_or_else(|| EditorError::NodeNotFound(target.to_string()))?,
            ),
            None => None,
        };

        let id = node.id.clone();
        self.arena.insert(parent, node)?;
        debug!(node_id = %id, target = ?target_id, "Dropped node");

        Ok(Some(id))
    }

    /// Set or clear the selection
    ///
    /// Ids are not validated, matching a click on a node that was just
    /// removed: [`Editor::selected_node`] simply returns `None`.
    pub fn select_node(&mut self, node_id: Option<&str>) {
        self.selected = node_id.map(str::to_string);
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Snapshot of the selected node and its subtree
    pub fn selected_node(&self) -> Option<SchemaNode> {
        let idx = self.arena.find(self.selected.as_deref()?)?;
        self.arena.snapshot(idx)
    }

    /// Replace one prop of the selected node
    ///
    /// A no-op without a selection, or if the selected node no longer exists.
    pub fn patch_prop(&mut self, key: &str, value: impl Into<Value>) {
        let Some(idx) = self.selected.as_deref().and_then(|id| self.arena.find(id)) else {
            return;
        };
        if let Some(node) = self.arena.get_mut(idx) {
            node.props.insert(key.to_string(), value.into());
        }
    }

    /// Remove the selected node and its subtree, then clear the selection
    ///
    /// Returns how many nodes were removed.
    pub fn delete_selected(&mut self) -> usize {
        let Some(id) = self.selected.take() else {
            return 0;
        };
        let removed = self.arena.remove(&id);
        debug!(node_id = %id, removed, "Deleted selection");
        removed
    }

    /// The current forest as pretty JSON
    pub fn export_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(&self.forest())?)
    }

    /// Standalone preview document for the current forest
    pub fn export_html_preview(&self) -> String {
        let html = render_preview(&self.forest());
        info!(bytes = html.len(), "Exported HTML preview");
        info!("{}", html);
        html
    }

    /// Replace the forest with a previously exported one
    ///
    /// Clears the staged node and the selection. On error the editor is left
    /// unchanged.
    pub fn load_json(&mut self, source: &str) -> Result<(), EditorError> {
        let nodes: Forest = serde_json::from_str(source)?;
        self.arena = SchemaArena::from_forest(&nodes)?;
        self.staged = None;
        self.selected = None;
        info!(nodes = self.arena.len(), "Loaded schema");
        Ok(())
    }

    fn fresh_id(&mut self, node_type: &NodeType) -> String {
        loop {
            let id = self.ids.next_id(node_type);
            if !self.arena.contains(&id) {
                return id;
            }
        }
    }
}
