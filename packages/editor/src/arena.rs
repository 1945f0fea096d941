//! # Schema Arena
//!
//! Flat storage for the editor's node forest.
//!
//! Nodes live in a slot table addressed by [`NodeIndex`]. Parent and child
//! links are indices, and an id map gives constant-time lookup by node id.
//! Removing a node tombstones its slot (and every descendant's) instead of
//! shifting the table. Tombstoned slots go on a free list and are reused by
//! later inserts, so the table never outgrows the largest live tree. A
//! `NodeIndex` is only meaningful until its node is removed; hold ids across
//! deletes.
//!
//! ```text
//! slots:  [0: section] [1: heading] [2: ✝] [3: button]
//! free:   [2]
//! roots:  [0, 3]
//! 0.children: [1]
//! ```

use std::collections::HashMap;
use webbuilder_schema::{duplicate_ids, Forest, NodeType, Props, SchemaNode};

use crate::EditorError;

/// Index of a slot in a [`SchemaArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node stored in the arena
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaNode {
    pub id: String,
    pub node_type: NodeType,
    pub props: Props,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
}

impl ArenaNode {
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }
}

#[derive(Debug, Clone, Default)]
pub struct SchemaArena {
    slots: Vec<Option<ArenaNode>>,
    free: Vec<NodeIndex>,
    ids: HashMap<String, NodeIndex>,
    roots: Vec<NodeIndex>,
}

impl SchemaArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an arena from a forest, rejecting repeated ids
    pub fn from_forest(nodes: &[SchemaNode]) -> Result<Self, EditorError> {
        if let Some(id) = duplicate_ids(nodes).into_iter().next() {
            return Err(EditorError::DuplicateId(id));
        }

        let mut arena = Self::new();
        for node in nodes {
            arena.insert(None, node.clone())?;
        }
        Ok(arena)
    }

    /// Rebuild the nested forest, in sibling order
    pub fn to_forest(&self) -> Forest {
        self.roots.iter().filter_map(|idx| self.snapshot(*idx)).collect()
    }

    /// Nested copy of the subtree rooted at `idx`
    pub fn snapshot(&self, idx: NodeIndex) -> Option<SchemaNode> {
        let node = self.get(idx)?;
        Some(SchemaNode {
            id: node.id.clone(),
            node_type: node.node_type.clone(),
            props: node.props.clone(),
            children: node
                .children
                .iter()
                .filter_map(|child| self.snapshot(*child))
                .collect(),
        })
    }

    pub fn get(&self, idx: NodeIndex) -> Option<&ArenaNode> {
        self.slots.get(idx.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, idx: NodeIndex) -> Option<&mut ArenaNode> {
        self.slots.get_mut(idx.0).and_then(Option::as_mut)
    }

    pub fn find(&self, id: &str) -> Option<NodeIndex> {
        self.ids.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains_key(id)
    }

    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    /// Append a root whose ids are known to be fresh, skipping the checks
    pub(crate) fn push_root(&mut self, node: SchemaNode) -> NodeIndex {
        let idx = self.insert_subtree(None, node);
        self.roots.push(idx);
        idx
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Insert a node (and its children) as the last root or the last child of
    /// `parent`
    ///
    /// Fails without modifying the arena if the parent is missing or any id in
    /// the subtree is already taken.
    pub fn insert(
        &mut self,
        parent: Option<NodeIndex>,
        node: SchemaNode,
    ) -> Result<NodeIndex, EditorError> {
        if let Some(parent) = parent {
            if self.get(parent).is_none() {
                return Err(EditorError::NodeNotFound(format!("#{}", parent.0)));
            }
        }
        self.check_ids(&node)?;

        let idx = self.insert_subtree(parent, node);
        match parent.and_then(|p| self.get_mut(p)) {
            Some(parent) => parent.children.push(idx),
            None => self.roots.push(idx),
        }
        Ok(idx)
    }

    /// Remove the node with `id` and its whole subtree, returning how many
    /// nodes were removed
    pub fn remove(&mut self, id: &str) -> usize {
        let Some(idx) = self.find(id) else {
            return 0;
        };

        let parent = self.get(idx).and_then(|node| node.parent);
        match parent.and_then(|p| self.get_mut(p)) {
            Some(parent) => parent.children.retain(|child| *child != idx),
            None => self.roots.retain(|root| *root != idx),
        }

        self.tombstone(idx)
    }

    fn check_ids(&self, node: &SchemaNode) -> Result<(), EditorError> {
        if let Some(id) = duplicate_ids(std::slice::from_ref(node)).into_iter().next() {
            return Err(EditorError::DuplicateId(id));
        }

        fn walk(arena: &SchemaArena, node: &SchemaNode) -> Result<(), EditorError> {
            if arena.contains(&node.id) {
                return Err(EditorError::DuplicateId(node.id.clone()));
            }
            node.children.iter().try_for_each(|child| walk(arena, child))
        }
        walk(self, node)
    }

    fn insert_subtree(&mut self, parent: Option<NodeIndex>, node: SchemaNode) -> NodeIndex {
        let slot = ArenaNode {
            id: node.id.clone(),
            node_type: node.node_type,
            props: node.props,
            parent,
            children: Vec::new(),
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx.0] = Some(slot);
                idx
            }
            None => {
                self.slots.push(Some(slot));
                NodeIndex(self.slots.len() - 1)
            }
        };
        self.ids.insert(node.id, idx);

        let children: Vec<NodeIndex> = node
            .children
            .into_iter()
            .map(|child| self.insert_subtree(Some(idx), child))
            .collect();
        if let Some(slot) = self.get_mut(idx) {
            slot.children = children;
        }
        idx
    }

    fn tombstone(&mut self, idx: NodeIndex) -> usize {
        let Some(node) = self.slots.get_mut(idx.0).and_then(Option::take) else {
            return 0;
        };
        self.ids.remove(&node.id);
        self.free.push(idx);

        1 + node
            .children
            .into_iter()
            .map(|child| self.tombstone(child))
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Forest {
        vec![
            SchemaNode::new("a", NodeType::Section).with_children(vec![
                SchemaNode::new("a1", NodeType::Heading).with_prop("text", "Hi"),
                SchemaNode::new("a2", NodeType::Section)
                    .with_children(vec![SchemaNode::new("a2x", NodeType::Text)]),
            ]),
            SchemaNode::new("b", NodeType::Button),
        ]
    }

    #[test]
    fn test_forest_round_trip_preserves_order() {
        let arena = SchemaArena::from_forest(&sample()).unwrap();
        assert_eq!(arena.len(), 5);
        assert_eq!(arena.to_forest(), sample());
    }

    #[test]
    fn test_links_are_indices() {
        let arena = SchemaArena::from_forest(&sample()).unwrap();
        let a = arena.find("a").unwrap();
        let a2 = arena.find("a2").unwrap();

        assert_eq!(arena.get(a2).unwrap().parent(), Some(a));
        assert_eq!(arena.get(a).unwrap().children().len(), 2);
        assert_eq!(arena.roots().len(), 2);
    }

    #[test]
    fn test_remove_tombstones_subtree() {
        let mut arena = SchemaArena::from_forest(&sample()).unwrap();
        let b = arena.find("b").unwrap();

        assert_eq!(arena.remove("a2"), 2);
        assert!(!arena.contains("a2x"));
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.find("b"), Some(b));
        assert_eq!(arena.to_forest()[0].children.len(), 1);

        assert_eq!(arena.remove("missing"), 0);
    }

    #[test]
    fn test_removed_slots_are_reused() {
        let mut arena = SchemaArena::from_forest(&sample()).unwrap();
        let b = arena.find("b").unwrap();

        for round in 0..50 {
            let id = format!("tmp-{}", round);
            arena
                .insert(Some(b), SchemaNode::new(id.as_str(), NodeType::Section).with_children(vec![
                    SchemaNode::new(format!("{}-child", id), NodeType::Text),
                ]))
                .unwrap();
            assert_eq!(arena.remove(&id), 2);
        }

        assert_eq!(arena.slots.len(), 7);
        assert_eq!(arena.len(), 5);
        assert_eq!(arena.to_forest(), sample());
    }

    #[test]
    fn test_insert_rejects_duplicate_ids() {
        let mut arena = SchemaArena::from_forest(&sample()).unwrap();
        let err = arena
            .insert(None, SchemaNode::new("a1", NodeType::Text))
            .unwrap_err();
        assert!(matches!(err, EditorError::DuplicateId(id) if id == "a1"));
        assert_eq!(arena.len(), 5);
    }

    #[test]
    fn test_from_forest_rejects_duplicates() {
        let forest = vec![
            SchemaNode::new("x", NodeType::Text),
            SchemaNode::new("y", NodeType::Section)
                .with_children(vec![SchemaNode::new("x", NodeType::Text)]),
        ];
        assert!(matches!(
            SchemaArena::from_forest(&forest),
            Err(EditorError::DuplicateId(id)) if id == "x"
        ));
    }

    #[test]
    fn test_insert_under_parent() {
        let mut arena = SchemaArena::from_forest(&sample()).unwrap();
        let b = arena.find("b").unwrap();
        arena
            .insert(Some(b), SchemaNode::new("b1", NodeType::Text))
            .unwrap();

        let forest = arena.to_forest();
        assert_eq!(forest[1].children[0].id, "b1");
    }
}
