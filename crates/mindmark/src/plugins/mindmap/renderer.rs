//! SVG rendering implementation for mindmaps
//!
//! Converts a positioned outline into a single SVG document. Elements are
//! emitted in a fixed order: background, glow filter, connectors, then one
//! marker and label per node in pre-order.

use std::fmt::Write as _;

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use super::layout::{PositionedEdge, PositionedNode, RadialLayoutAlgorithm, RadialLayoutResult};
use super::MindmapDatabase;
use crate::core::{
    escape_markup, label_len, Database, DepthStyle, DepthTier, EdgeStyle, LayoutAlgorithm,
    RenderConfig, Renderer, BACKGROUND_COLOR,
};

const FONT_FAMILY: &str = "system-ui,sans-serif";
const HUB_FILL: &str = "#f0f0f5";
const HUB_STROKE: &str = "#6366f1";
const GLOW_FILTER: &str = "<defs><filter id=\"glow\"><feGaussianBlur stdDeviation=\"3\" result=\"g\"/><feMerge><feMergeNode in=\"g\"/><feMergeNode in=\"SourceGraphic\"/></feMerge></filter></defs>";

/// Width of a branch pill per label character
const PILL_CHAR_WIDTH: usize = 9;
const PILL_MIN_WIDTH: usize = 80;
const PILL_OUTLINE_OPACITY: f64 = 0.5;

/// Mindmap SVG renderer
pub struct SvgRenderer {
    config: RenderConfig,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Pill width for a depth-1 label
    pub fn pill_width(label: &str) -> usize {
        (label_len(label) * PILL_CHAR_WIDTH).max(PILL_MIN_WIDTH)
    }

    /// Render an already computed layout
    ///
    /// Reads `database` only for labels; positions, depths and colors all
    /// come from `layout`.
    pub fn render_layout(&self, database: &MindmapDatabase, layout: &RadialLayoutResult) -> String {
        let (width, height) = (layout.width, layout.height);
        let mut lines = Vec::with_capacity(3 + layout.edges.len() + layout.nodes.len() * 3 + 1);

        lines.push(format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = width,
            h = height
        ));
        lines.push(format!(
            "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            width, height, BACKGROUND_COLOR
        ));
        lines.push(GLOW_FILTER.to_string());

        for edge in &layout.edges {
            if let Some(path) = self.draw_edge(layout, edge) {
                lines.push(path);
            }
        }

        for node in &layout.nodes {
            let label = escape_markup(database.label(node.id));
            trace!(node = %node.id, depth = node.depth, "Drawing node");
            self.draw_node(&mut lines, node, &label, database.label(node.id));
        }

        lines.push("</svg>".to_string());
        lines.join("\n")
    }

    /// Quadratic connector bowing through the parent's height
    fn draw_edge(&self, layout: &RadialLayoutResult, edge: &PositionedEdge) -> Option<String> {
        let parent = layout.node(edge.parent)?;
        let child = layout.node(edge.child)?;
        let style = EdgeStyle::for_depth(child.depth);
        let (from, to) = (parent.position, child.position);
        let mid_x = (from.x + to.x) / 2.0;

        Some(format!(
            "<path d=\"M{},{} Q{},{} {},{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" opacity=\"{}\"/>",
            px(from.x),
            px(from.y),
            px(mid_x),
            px(from.y),
            px(to.x),
            px(to.y),
            child.color,
            style.stroke_width,
            style.opacity
        ))
    }

    fn draw_node(&self, lines: &mut Vec<String>, node: &PositionedNode, label: &str, raw_label: &str) {
        let style = DepthStyle::for_depth(node.depth);
        let (x, y) = (node.position.x, node.position.y);

        match style.tier {
            DepthTier::Hub => {
                lines.push(format!(
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"3\" filter=\"url(#glow)\"/>",
                    px(x),
                    px(y),
                    style.marker_radius,
                    HUB_FILL,
                    HUB_STROKE
                ));
                lines.push(centered_text(x, y, &style, label));
            }
            DepthTier::Branch => {
                let pill_width = Self::pill_width(raw_label);
                let half_height = style.marker_radius;
                let left = x - pill_width as f64 / 2.0;
                let top = y - half_height;
                lines.push(format!(
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\" opacity=\"{}\"/>",
                    px(left),
                    px(top),
                    pill_width,
                    half_height * 2.0,
                    half_height,
                    node.color,
                    style.marker_opacity
                ));
                lines.push(format!(
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" opacity=\"{}\"/>",
                    px(left),
                    px(top),
                    pill_width,
                    half_height * 2.0,
                    half_height,
                    node.color,
                    PILL_OUTLINE_OPACITY
                ));
                lines.push(centered_text(x, y, &style, label));
            }
            DepthTier::Leaf | DepthTier::Deep => {
                lines.push(format!(
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" opacity=\"{}\"/>",
                    px(x),
                    px(y),
                    style.marker_radius,
                    node.color,
                    style.marker_opacity
                ));
                lines.push(side_text(x + style.label_offset, y, &style, label));
            }
        }
    }
}

/// Whole-unit coordinate
fn px(value: f64) -> String {
    format!("{:.0}", value)
}

fn font_attrs(style: &DepthStyle) -> String {
    let mut attrs = format!(
        "fill=\"{}\" font-family=\"{}\" font-size=\"{}\"",
        style.text_color, FONT_FAMILY, style.font_size
    );
    if let Some(weight) = style.font_weight {
        let _ = write!(attrs, " font-weight=\"{}\"", weight);
    }
    attrs
}

fn centered_text(x: f64, y: f64, style: &DepthStyle, label: &str) -> String {
    format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" {}>{}</text>",
        px(x),
        px(y),
        font_attrs(style),
        label
    )
}

fn side_text(x: f64, y: f64, style: &DepthStyle, label: &str) -> String {
    format!(
        "<text x=\"{}\" y=\"{}\" dominant-baseline=\"central\" {}>{}</text>",
        px(x),
        px(y),
        font_attrs(style),
        label
    )
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer<MindmapDatabase> for SvgRenderer {
    type Output = String;

    fn render(&self, database: &MindmapDatabase) -> Result<Self::Output> {
        let render_span = span!(
            Level::INFO,
            "render_svg",
            node_count = database.node_count(),
            edge_count = database.edge_count(),
            width = self.config.width,
            height = self.config.height
        );
        let _enter = render_span.enter();

        trace!("Starting SVG rendering");

        let layout = RadialLayoutAlgorithm::with_config(&self.config).layout(database)?;
        debug!(positioned = layout.nodes.len(), "Layout ready");

        let output = self.render_layout(database, &layout);
        info!(output_len = output.len(), "SVG rendering completed");

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "svg"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "svg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Parser;
    use crate::plugins::mindmap::OutlineParser;

    fn render(input: &str) -> String {
        let mut db = MindmapDatabase::new();
        OutlineParser::new().parse(input, &mut db).unwrap();
        SvgRenderer::new().render(&db).unwrap()
    }

    #[test]
    fn test_renderer_metadata() {
        let renderer = SvgRenderer::new();
        assert_eq!(renderer.name(), "svg");
        assert_eq!(renderer.version(), "0.1.0");
        assert_eq!(renderer.format(), "svg");
        assert_eq!(renderer.config().width, 3840);
    }

    #[test]
    fn test_document_frame() {
        let svg = render("# Root");
        let lines: Vec<&str> = svg.lines().collect();
        assert_eq!(
            lines[0],
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"3840\" height=\"2160\" viewBox=\"0 0 3840 2160\">"
        );
        assert_eq!(lines[1], "<rect width=\"3840\" height=\"2160\" fill=\"#ffffff\"/>");
        assert!(lines[2].starts_with("<defs><filter id=\"glow\">"));
        assert_eq!(*lines.last().unwrap(), "</svg>");
    }

    #[test]
    fn test_root_only_document() {
        let svg = render("");
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains("filter=\"url(#glow)\""));
        assert!(!svg.contains("<path"));
        assert!(svg.contains("<text x=\"1920\" y=\"1080\""));
    }

    #[test]
    fn test_hub_markup() {
        let svg = render("# Center");
        assert!(svg.contains(
            "<circle cx=\"1920\" cy=\"1080\" r=\"60\" fill=\"#f0f0f5\" stroke=\"#6366f1\" stroke-width=\"3\" filter=\"url(#glow)\"/>"
        ));
        assert!(svg.contains("font-size=\"28\" font-weight=\"bold\">Center</text>"));
    }

    #[test]
    fn test_branch_pill_width() {
        assert_eq!(SvgRenderer::pill_width("short"), 80);
        assert_eq!(SvgRenderer::pill_width("a considerably longer label"), 27 * 9);
        assert_eq!(SvgRenderer::pill_width("日本語日本語日本語日本語"), 108);
    }

    #[test]
    fn test_branch_pill_markup() {
        // One branch at angle 0: centered at (1920 + 604.8, 1080)
        let svg = render("# Root\n## Branch");
        assert!(svg.contains(
            "<rect x=\"2485\" y=\"1060\" width=\"80\" height=\"40\" rx=\"20\" fill=\"#6366f1\" opacity=\"0.2\"/>"
        ));
        assert!(svg.contains("fill=\"none\" stroke=\"#6366f1\" stroke-width=\"2\" opacity=\"0.5\"/>"));
        assert!(svg.contains("text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"#222\""));
    }

    #[test]
    fn test_leaf_and_deep_markers() {
        let svg = render("# Root\n## Branch\n- leaf\n  - deep");
        assert!(svg.contains("r=\"5\" fill=\"#6366f1\" opacity=\"0.6\"/>"));
        assert!(svg.contains("r=\"3\" fill=\"#6366f1\" opacity=\"0.4\"/>"));
        assert!(svg.contains("font-size=\"18\">leaf</text>"));
        assert!(svg.contains("font-size=\"14\">deep</text>"));
    }

    #[test]
    fn test_edges_drawn_before_nodes() {
        let svg = render("# Root\n## A\n## B");
        let last_path = svg.rfind("<path").unwrap();
        let first_text = svg.find("<text").unwrap();
        assert!(last_path < first_text);
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn test_edge_control_point_uses_parent_height() {
        let svg = render("# Root\n## Only");
        // Parent (1920,1080), child (2525,1080): control at midpoint x, parent y
        assert!(svg.contains("d=\"M1920,1080 Q2222,1080 2525,1080\""));
    }

    #[test]
    fn test_labels_escaped() {
        let svg = render("# Fish & <Chips> \"Co\"");
        assert!(svg.contains(">Fish &amp; &lt;Chips&gt; &quot;Co&quot;</text>"));
        assert!(!svg.contains("<Chips>"));
    }

    #[test]
    fn test_custom_dimensions() {
        let mut db = MindmapDatabase::new();
        OutlineParser::new().parse("# Root", &mut db).unwrap();
        let renderer = SvgRenderer::with_config(RenderConfig::new(800, 600));
        let svg = renderer.render(&db).unwrap();
        assert!(svg.contains("viewBox=\"0 0 800 600\""));
        assert!(svg.contains("cx=\"400\" cy=\"300\""));
    }
}
