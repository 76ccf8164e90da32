//! Mindmap diagram plugin
//!
//! Converts heading/bullet outlines into radial mindmaps.
//!
//! Syntax examples:
//! - Headings: `# Topic`, `## Subtopic` (levels 1-6)
//! - Bullets: `- item`, `* item`, indented by two spaces per level
//! - Any other line is ignored

mod database;
mod layout;
mod parser;
mod renderer;
mod syntax;

pub use database::{MindmapDatabase, OutlineNode};
pub use layout::{
    PositionedEdge, PositionedNode, RadialLayoutAlgorithm, RadialLayoutResult, DECAY_DEPTH,
    FAR_RADIUS_DECAY, NEAR_RADIUS_DECAY, ROOT_RADIUS_FACTOR, SECTOR_SPREAD,
};
pub use parser::OutlineParser;
pub use renderer::SvgRenderer;
pub use syntax::{classify_line, LineKind, OutlineLine, BULLET_BASE_RANK, MAX_HEADING_LEVEL};
