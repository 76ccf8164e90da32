//! Mindmark - Turn Markdown-style outlines into radial mindmaps
//!
//! A library for parsing heading/bullet outlines and rendering them as a
//! radial mindmap SVG document.
//!
//! # Quick Start
//!
//! ```rust
//! use mindmark::render;
//!
//! let input = "# Trip\n## Pack\n- tent\n## Route";
//! let svg = render(input).unwrap();
//! assert!(svg.contains("Trip"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use mindmark::prelude::*;
//!
//! let input = "# Root\n- one\n- two";
//!
//! // Parse into a database
//! let parser = OutlineParser::new();
//! let mut database = MindmapDatabase::new();
//! parser.parse(input, &mut database).unwrap();
//! assert_eq!(database.node_count(), 3);
//!
//! // Position every node
//! let layout = RadialLayoutAlgorithm::new(1280, 720).layout(&database).unwrap();
//! assert_eq!(layout.edges.len(), 2);
//!
//! // Render to SVG
//! let renderer = SvgRenderer::with_config(RenderConfig::new(1280, 720));
//! let svg = renderer.render_layout(&database, &layout);
//! assert!(svg.contains("viewBox=\"0 0 1280 720\""));
//! ```

pub mod core;
pub mod plugins;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Database, DepthStyle, DepthTier, EdgeStyle, LayoutAlgorithm, NodeId, Palette, Parser,
        Point, RenderConfig, Renderer,
    };
    pub use crate::plugins::mindmap::{
        MindmapDatabase, OutlineNode, OutlineParser, PositionedEdge, PositionedNode,
        RadialLayoutAlgorithm, RadialLayoutResult, SvgRenderer,
    };
    pub use crate::plugins::Orchestrator;
}

/// Render an outline to a 3840x2160 SVG mindmap
///
/// # Example
/// ```rust
/// use mindmark::render;
///
/// let svg = render("# Center\n- left\n- right").unwrap();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("Center"));
/// ```
pub fn render(input: &str) -> anyhow::Result<String> {
    render_with_config(input, &RenderConfig::default())
}

/// Render an outline with a specific canvas size and palette
///
/// Fails only when `config` itself is invalid (zero-sized canvas).
///
/// # Example
/// ```rust
/// use mindmark::{render_with_config, RenderConfig};
///
/// let svg = render_with_config("# Root", &RenderConfig::new(640, 480)).unwrap();
/// assert!(svg.contains("width=\"640\" height=\"480\""));
///
/// assert!(render_with_config("# Root", &RenderConfig::new(0, 480)).is_err());
/// ```
pub fn render_with_config(input: &str, config: &RenderConfig) -> anyhow::Result<String> {
    use crate::plugins::orchestrator::Orchestrator;

    config.validate()?;
    Orchestrator::with_config(config.clone()).process(input)
}

/// Parse an outline into a database without laying it out
///
/// # Example
/// ```rust
/// use mindmark::parse;
/// use mindmark::prelude::Database;
///
/// let db = parse("# A\n## B\n- C\n- D").unwrap();
/// assert_eq!(db.node_count(), 4);
/// assert_eq!(db.label(db.root()), "A");
/// ```
pub fn parse(input: &str) -> anyhow::Result<plugins::mindmap::MindmapDatabase> {
    use crate::core::Parser as _;
    use crate::plugins::mindmap::{MindmapDatabase, OutlineParser};

    let mut database = MindmapDatabase::new();
    OutlineParser::new().parse(input, &mut database)?;
    Ok(database)
}
