//! Mindmap database implementation
//!
//! Stores the outline tree as an arena of nodes addressed by [`NodeId`].
//! `NodeId(0)` is always the synthetic, unlabeled hub that the parser
//! hangs top-level items from; [`MindmapDatabase::root`] tells which node
//! the diagram is actually centered on.

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::core::{Database, NodeId};

/// One item of the outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    /// Display text, raw and unescaped
    pub label: String,
    /// Parse-time nesting rank: 1-6 for headings, 7 + indent/2 for bullets,
    /// 0 for the synthetic hub
    pub level: usize,
    /// Children in source order
    pub children: Vec<NodeId>,
}

impl OutlineNode {
    pub fn new(label: impl Into<String>, level: usize) -> Self {
        Self {
            label: label.into(),
            level,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-backed outline tree
#[derive(Debug, Clone)]
pub struct MindmapDatabase {
    nodes: Vec<OutlineNode>,
    parents: Vec<Option<NodeId>>,
    root: NodeId,
}

impl MindmapDatabase {
    /// The synthetic hub every parse starts from
    pub const HUB: NodeId = NodeId(0);

    pub fn new() -> Self {
        Self {
            nodes: vec![OutlineNode::new("", 0)],
            parents: vec![None],
            root: Self::HUB,
        }
    }

    /// Append a node as the last child of `parent`
    pub fn add_child(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
        level: usize,
    ) -> Result<NodeId> {
        if parent.index() >= self.nodes.len() {
            return Err(anyhow!("Parent node '{}' not found", parent));
        }

        let id = NodeId(self.nodes.len());
        let node = OutlineNode::new(label, level);
        debug!(node = %id, parent = %parent, level, label = %node.label, "Added outline node");
        self.nodes.push(node);
        self.parents.push(Some(parent));
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    /// Parse-time rank of a node (0 for unknown IDs)
    pub fn level(&self, id: NodeId) -> usize {
        self.nodes.get(id.index()).map_or(0, |n| n.level)
    }

    /// Parent of a node; `None` for the hub and for unknown IDs
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.index()).copied().flatten()
    }

    /// Pick the diagram root: a lone top-level item becomes the center,
    /// otherwise the unlabeled hub stays in place.
    pub fn collapse_root(&mut self) {
        let top_level = &self.nodes[Self::HUB.index()].children;
        self.root = match top_level.as_slice() {
            [only] => *only,
            _ => Self::HUB,
        };
        debug!(root = %self.root, top_level = top_level.len(), "Selected diagram root");
    }

    /// True when the root is the synthetic hub rather than an outline item
    pub fn has_synthetic_root(&self) -> bool {
        self.root == Self::HUB
    }

    /// Distance from the diagram root, or `None` when `id` is not part of
    /// the diagram
    pub fn depth_of(&self, id: NodeId) -> Option<usize> {
        let mut depth = 0;
        let mut current = id;
        while current != self.root {
            current = self.parent(current)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Deepest depth present in the diagram (0 for a root-only diagram)
    pub fn max_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(self.children(id).iter().map(|&child| (child, depth + 1)));
        }
        deepest
    }

    /// The depth-1 nodes, in angular order
    pub fn main_branches(&self) -> &[NodeId] {
        self.children(self.root)
    }

    /// Label of a node (empty for unknown IDs)
    pub fn label(&self, id: NodeId) -> &str {
        self.nodes.get(id.index()).map_or("", |n| n.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.children(self.root).is_empty()
    }
}

impl Default for MindmapDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl Database for MindmapDatabase {
    type Node = OutlineNode;

    fn root(&self) -> NodeId {
        self.root
    }

    fn get_node(&self, id: NodeId) -> Option<&OutlineNode> {
        self.nodes.get(id.index())
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.index())
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![self.root];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.children(id).iter().rev().copied());
            Some(id)
        })
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (MindmapDatabase, NodeId, NodeId, NodeId) {
        let mut db = MindmapDatabase::new();
        let a = db.add_child(MindmapDatabase::HUB, "A", 1).unwrap();
        let b = db.add_child(a, "B", 2).unwrap();
        let c = db.add_child(a, "C", 2).unwrap();
        db.collapse_root();
        (db, a, b, c)
    }

    #[test]
    fn test_new_database_is_hub_only() {
        let db = MindmapDatabase::new();
        assert_eq!(db.root(), MindmapDatabase::HUB);
        assert!(db.has_synthetic_root());
        assert!(db.is_empty());
        assert_eq!(db.node_count(), 1);
        assert_eq!(db.edge_count(), 0);
        assert_eq!(db.max_depth(), 0);
    }

    #[test]
    fn test_add_child_unknown_parent() {
        let mut db = MindmapDatabase::new();
        assert!(db.add_child(NodeId(5), "X", 1).is_err());
    }

    #[test]
    fn test_single_top_level_item_becomes_root() {
        let (db, a, b, c) = sample();
        assert_eq!(db.root(), a);
        assert!(!db.has_synthetic_root());
        assert_eq!(db.children(a), &[b, c]);
        assert_eq!(db.node_count(), 3);
        assert_eq!(db.edge_count(), 2);
    }

    #[test]
    fn test_multiple_top_level_items_keep_hub() {
        let mut db = MindmapDatabase::new();
        db.add_child(MindmapDatabase::HUB, "A", 1).unwrap();
        db.add_child(MindmapDatabase::HUB, "B", 1).unwrap();
        db.collapse_root();
        assert_eq!(db.root(), MindmapDatabase::HUB);
        assert_eq!(db.label(db.root()), "");
        assert_eq!(db.main_branches().len(), 2);
    }

    #[test]
    fn test_depth_and_parent() {
        let (db, a, b, _) = sample();
        assert_eq!(db.depth_of(a), Some(0));
        assert_eq!(db.depth_of(b), Some(1));
        assert_eq!(db.parent(b), Some(a));
        // The hub is not part of a collapsed diagram
        assert_eq!(db.depth_of(MindmapDatabase::HUB), None);
        assert_eq!(db.max_depth(), 1);
    }

    #[test]
    fn test_node_ids_pre_order() {
        let mut db = MindmapDatabase::new();
        let a = db.add_child(MindmapDatabase::HUB, "A", 1).unwrap();
        let a1 = db.add_child(a, "A1", 7).unwrap();
        let b = db.add_child(MindmapDatabase::HUB, "B", 1).unwrap();
        let a1x = db.add_child(a1, "A1x", 8).unwrap();
        db.collapse_root();

        let order: Vec<NodeId> = db.node_ids().collect();
        assert_eq!(order, vec![MindmapDatabase::HUB, a, a1, a1x, b]);
    }

    #[test]
    fn test_clear_resets_to_hub() {
        let (mut db, ..) = sample();
        db.clear();
        assert_eq!(db.node_count(), 1);
        assert!(db.has_synthetic_root());
    }
}
