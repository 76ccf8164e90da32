//! Radial layout implementation
//!
//! The root sits at the canvas center with the full circle `[-π, π]` as its
//! sector. Each node splits its sector into equal steps, one per child, and
//! places child `i` at the midpoint of step `i`, at the node's ring radius.
//! A child's own sector is 90% of its step around that midpoint, and the
//! ring radius shrinks by 0.7 while the node placing it is shallower than
//! depth 2, by 0.6 afterwards.

use std::collections::HashMap;
use std::f64::consts::PI;

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use super::MindmapDatabase;
use crate::core::{
    Database, LayoutAlgorithm, NodeId, Palette, Point, RenderConfig, DEFAULT_HEIGHT,
    DEFAULT_WIDTH, ROOT_COLOR,
};

/// First ring radius as a fraction of the shorter canvas side
pub const ROOT_RADIUS_FACTOR: f64 = 0.28;

/// Fraction of a child's angular step handed down as its own sector
pub const SECTOR_SPREAD: f64 = 0.9;

/// Ring shrink factor applied by nodes shallower than [`DECAY_DEPTH`]
pub const NEAR_RADIUS_DECAY: f64 = 0.7;

/// Ring shrink factor applied by nodes at [`DECAY_DEPTH`] and deeper
pub const FAR_RADIUS_DECAY: f64 = 0.6;

/// Depth from which rings shrink faster
pub const DECAY_DEPTH: usize = 2;

/// Position data for a laid out node
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    pub id: NodeId,
    /// Distance from the diagram root
    pub depth: usize,
    pub position: Point,
    /// Branch color inherited from the depth-1 ancestor
    pub color: String,
    /// Angle the node was placed at, seen from its parent (0 for the root)
    pub angle: f64,
    /// Distance from the parent (0 for the root)
    pub radius: f64,
    /// Angular range split among this node's children
    pub sector: (f64, f64),
    /// Distance at which this node's children are placed
    pub child_radius: f64,
}

/// A parent → child connector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedEdge {
    pub parent: NodeId,
    pub child: NodeId,
}

/// Layout output containing positioned elements
///
/// `nodes` and `edges` are both in pre-order: a parent precedes its
/// children, and one branch is complete before the next one starts.
#[derive(Debug, Clone)]
pub struct RadialLayoutResult {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<PositionedEdge>,
    pub width: u32,
    pub height: u32,
    index: HashMap<NodeId, usize>,
}

impl RadialLayoutResult {
    /// Positioned data for a node, if it is part of the diagram
    pub fn node(&self, id: NodeId) -> Option<&PositionedNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn root(&self) -> Option<&PositionedNode> {
        self.nodes.first()
    }
}

/// Radial layout algorithm
pub struct RadialLayoutAlgorithm {
    width: u32,
    height: u32,
    palette: Palette,
}

/// Placement inherited by a node whose children are about to be laid out
struct Frame<'a> {
    id: NodeId,
    depth: usize,
    position: Point,
    color: &'a str,
    sector: (f64, f64),
    radius: f64,
}

impl RadialLayoutAlgorithm {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            palette: Palette::default(),
        }
    }

    pub fn with_config(config: &RenderConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            palette: config.palette.clone(),
        }
    }

    /// Radius of the ring the main branches sit on
    pub fn root_radius(&self) -> f64 {
        f64::from(self.width.min(self.height)) * ROOT_RADIUS_FACTOR
    }

    /// Ring shrink factor applied when a node at `depth` hands a radius to
    /// its children
    pub fn radius_decay(depth: usize) -> f64 {
        if depth < DECAY_DEPTH {
            NEAR_RADIUS_DECAY
        } else {
            FAR_RADIUS_DECAY
        }
    }

    /// Lay the diagram out around an explicit center instead of the canvas
    /// center
    pub fn layout_at(&self, database: &MindmapDatabase, center: Point) -> RadialLayoutResult {
        let mut result = RadialLayoutResult {
            nodes: Vec::with_capacity(database.node_count()),
            edges: Vec::with_capacity(database.edge_count()),
            width: self.width,
            height: self.height,
            index: HashMap::new(),
        };

        let root = database.root();
        let root_frame = Frame {
            id: root,
            depth: 0,
            position: center,
            color: ROOT_COLOR,
            sector: (-PI, PI),
            radius: self.root_radius(),
        };
        self.push_node(&mut result, &root_frame, 0.0, 0.0);
        self.place_children(database, &root_frame, &mut result);

        result
    }

    fn push_node(&self, result: &mut RadialLayoutResult, frame: &Frame<'_>, angle: f64, radius: f64) {
        result.index.insert(frame.id, result.nodes.len());
        result.nodes.push(PositionedNode {
            id: frame.id,
            depth: frame.depth,
            position: frame.position,
            color: frame.color.to_string(),
            angle,
            radius,
            sector: frame.sector,
            child_radius: frame.radius,
        });
    }

    fn place_children(
        &self,
        database: &MindmapDatabase,
        parent: &Frame<'_>,
        result: &mut RadialLayoutResult,
    ) {
        let children = database.children(parent.id);
        if children.is_empty() {
            return;
        }

        let (start, end) = parent.sector;
        let step = (end - start) / children.len() as f64;
        let spread = step * SECTOR_SPREAD;
        let next_radius = parent.radius * Self::radius_decay(parent.depth);

        for (i, &child) in children.iter().enumerate() {
            let angle = start + step * (i as f64 + 0.5);
            let color = if parent.depth == 0 {
                self.palette.color_for(i)
            } else {
                parent.color
            };

            if parent.depth == 0 {
                debug!(branch = %child, index = i, color, angle, "Placed main branch");
            } else {
                trace!(node = %child, depth = parent.depth + 1, angle, "Placed node");
            }

            let frame = Frame {
                id: child,
                depth: parent.depth + 1,
                position: parent.position.polar_offset(angle, parent.radius),
                color,
                sector: (angle - spread / 2.0, angle + spread / 2.0),
                radius: next_radius,
            };

            self.push_node(result, &frame, angle, parent.radius);
            result.edges.push(PositionedEdge {
                parent: parent.id,
                child,
            });
            self.place_children(database, &frame, result);
        }
    }
}

impl Default for RadialLayoutAlgorithm {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl LayoutAlgorithm<MindmapDatabase> for RadialLayoutAlgorithm {
    type Output = RadialLayoutResult;

    fn layout(&self, database: &MindmapDatabase) -> Result<Self::Output> {
        let layout_span = span!(
            Level::INFO,
            "layout_radial",
            node_count = database.node_count(),
            width = self.width,
            height = self.height
        );
        let _enter = layout_span.enter();

        trace!("Starting radial layout");

        let center = Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0);
        let result = self.layout_at(database, center);

        info!(
            node_count = result.nodes.len(),
            edge_count = result.edges.len(),
            root_radius = self.root_radius(),
            "Radial layout completed"
        );

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "radial"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}
