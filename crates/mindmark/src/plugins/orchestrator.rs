//! Plugin orchestrator for coordinating the diagram processing pipeline
//!
//! The orchestrator manages the flow of data through all plugins:
//! Parser → Database → Layout → Renderer

use anyhow::Result;
use tracing::{debug, info, span, Level};

use crate::core::{Database, LayoutAlgorithm, Parser, RenderConfig};
use crate::plugins::mindmap::{MindmapDatabase, OutlineParser, RadialLayoutAlgorithm, SvgRenderer};

/// Plugin orchestrator that runs the complete outline → SVG pipeline
///
/// Callers get a full conversion without wiring each stage by hand; the
/// intermediate database and layout are still reachable through
/// [`Orchestrator::process_with_database`].
pub struct Orchestrator {
    parser: OutlineParser,
    layout: RadialLayoutAlgorithm,
    renderer: SvgRenderer,
}

impl Orchestrator {
    /// Create an orchestrator for the default 3840x2160 canvas
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create an orchestrator for a specific canvas and palette
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            parser: OutlineParser::new(),
            layout: RadialLayoutAlgorithm::with_config(&config),
            renderer: SvgRenderer::with_config(config),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        self.renderer.config()
    }

    /// Parse input into a fresh database
    pub fn parse(&self, input: &str) -> Result<MindmapDatabase> {
        let mut database = MindmapDatabase::new();
        self.parser.parse(input, &mut database)?;
        Ok(database)
    }

    /// Process input through the complete pipeline
    pub fn process(&self, input: &str) -> Result<String> {
        self.process_with_database(input).map(|(output, _)| output)
    }

    /// Process input and also hand back the parsed database
    pub fn process_with_database(&self, input: &str) -> Result<(String, MindmapDatabase)> {
        let process_span = span!(Level::INFO, "process_mindmap", input_len = input.len());
        let _enter = process_span.enter();

        info!("Starting mindmap processing pipeline");

        // Step 1: Parse the input
        let parse_span = span!(Level::DEBUG, "pipeline_parse");
        let _parse_enter = parse_span.enter();
        let database = self.parse(input)?;
        debug!(
            node_count = database.node_count(),
            edge_count = database.edge_count(),
            "Parsing completed"
        );
        drop(_parse_enter);

        // Step 2: Lay out the tree
        let layout_span = span!(Level::DEBUG, "pipeline_layout");
        let _layout_enter = layout_span.enter();
        let positioned = self.layout.layout(&database)?;
        debug!(positioned = positioned.nodes.len(), "Layout completed");
        drop(_layout_enter);

        // Step 3: Render the document
        let render_span = span!(Level::DEBUG, "pipeline_render");
        let _render_enter = render_span.enter();
        let output = self.renderer.render_layout(&database, &positioned);
        debug!(output_len = output.len(), "Rendering completed");
        drop(_render_enter);

        info!("Pipeline completed successfully");

        Ok((output, database))
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
