//! Core renderer trait for diagram output
//!
//! This trait defines the interface for rendering diagram data
//! into an output format.

use anyhow::Result;

use super::Database;

/// Core trait for diagram renderers
///
/// # Example
/// ```
/// use mindmark::core::Renderer;
/// use mindmark::plugins::mindmap::{MindmapDatabase, SvgRenderer};
///
/// let db = MindmapDatabase::new();
/// let renderer = SvgRenderer::new();
/// let output = renderer.render(&db).unwrap();
/// assert!(output.starts_with("<svg"));
/// ```
pub trait Renderer<D: Database>: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the diagram database into the output format
    fn render(&self, database: &D) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;
}
