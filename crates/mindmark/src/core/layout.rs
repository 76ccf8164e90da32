//! Core layout trait for diagram positioning
//!
//! This trait defines the interface for arranging diagram elements
//! in a coordinate system.

use anyhow::Result;

use super::Database;

/// Core trait for layout algorithms
///
/// A layout algorithm reads a database and produces a positioned view of
/// it. The database itself is left untouched, so a layout result is the
/// single place where positions are written.
///
/// # Example
/// ```
/// use mindmark::core::LayoutAlgorithm;
/// use mindmark::plugins::mindmap::{MindmapDatabase, RadialLayoutAlgorithm};
///
/// let db = MindmapDatabase::new();
/// let layout = RadialLayoutAlgorithm::new(800, 600);
/// let positioned = layout.layout(&db).unwrap();
/// assert!(positioned.edges.is_empty());
/// ```
pub trait LayoutAlgorithm<D: Database>: Send + Sync {
    /// The output type of this layout algorithm
    type Output;

    /// Arrange elements in the database using this layout algorithm
    fn layout(&self, database: &D) -> Result<Self::Output>;

    /// Get the name of this layout algorithm
    fn name(&self) -> &'static str;

    /// Get the version of this layout algorithm
    fn version(&self) -> &'static str;
}
