//! Core database trait for diagram data storage
//!
//! A diagram database owns the parsed tree. Nodes live in an arena and are
//! addressed by [`NodeId`]; parent → child relations are the only edges.

use super::NodeId;

/// Core trait for tree-shaped diagram databases
///
/// Each diagram type has its own database implementation. Layout and
/// rendering only ever read from it, so the trait exposes no mutation
/// beyond [`Database::clear`].
pub trait Database: Send + Sync {
    /// The node data type for this database
    type Node: Clone + Send + Sync;

    /// The node the diagram is centered on
    fn root(&self) -> NodeId;

    /// Get a node by ID
    fn get_node(&self, id: NodeId) -> Option<&Self::Node>;

    /// Ordered children of a node (empty for unknown IDs)
    fn children(&self, id: NodeId) -> &[NodeId];

    /// Iterate over the diagram's node IDs in pre-order, starting at the root
    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Number of nodes reachable from the root, the root included
    fn node_count(&self) -> usize {
        self.node_ids().count()
    }

    /// Number of parent → child relations in the diagram
    fn edge_count(&self) -> usize {
        self.node_count().saturating_sub(1)
    }
}
