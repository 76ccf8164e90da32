//! Core type definitions for diagram processing
//!
//! This module contains the fundamental types used throughout mindmark:
//! node handles, coordinates, the branch palette, per-depth styling tables
//! and the render configuration.

use std::fmt;
use std::str::FromStr;

use super::MindmapError;

/// Default output width in pixels
pub const DEFAULT_WIDTH: u32 = 3840;

/// Default output height in pixels
pub const DEFAULT_HEIGHT: u32 = 2160;

/// Color given to the diagram root, which belongs to no branch
pub const ROOT_COLOR: &str = "#ffffff";

/// Canvas background fill
pub const BACKGROUND_COLOR: &str = "#ffffff";

/// Branch hues, assigned to main branches in sibling order
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#6366f1", "#8b5cf6", "#ec4899", "#f43f5e", "#f97316", "#eab308", "#22c55e", "#06b6d4",
    "#3b82f6", "#a855f7",
];

/// Handle to a node stored in a diagram database arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Position of the node in its arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A position in output coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `radius` away from `self` in direction `angle` (radians)
    pub fn polar_offset(self, angle: f64, radius: f64) -> Self {
        Self {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Ordered list of branch colors
///
/// Main branch `i` takes color `i mod len`, so a palette of any size wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette, rejecting empty lists and colors that are not
    /// plain `#hex` or named values
    pub fn new<I, S>(colors: I) -> Result<Self, MindmapError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(MindmapError::invalid_palette("palette needs at least one color"));
        }
        for color in &colors {
            let valid = !color.is_empty()
                && color
                    .chars()
                    .enumerate()
                    .all(|(i, c)| c.is_ascii_alphanumeric() || (i == 0 && c == '#'));
            if !valid {
                return Err(MindmapError::invalid_palette(format!(
                    "'{}' is not a #hex or named color",
                    color
                )));
            }
        }
        Ok(Self { colors })
    }

    /// Color for the main branch at sibling index `index`
    pub fn color_for(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl FromStr for Palette {
    type Err = MindmapError;

    /// Parse a comma-separated list such as `"#ff0000, #00ff00"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(
            s.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        )
    }
}

/// Visual tier of a node, derived from its depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthTier {
    /// Depth 0: the glowing center circle
    Hub,
    /// Depth 1: pill-shaped main branches
    Branch,
    /// Depth 2: dot with a label to its right
    Leaf,
    /// Depth 3 and beyond: smaller, fainter dot and label
    Deep,
}

impl DepthTier {
    pub fn for_depth(depth: usize) -> Self {
        match depth {
            0 => DepthTier::Hub,
            1 => DepthTier::Branch,
            2 => DepthTier::Leaf,
            _ => DepthTier::Deep,
        }
    }
}

impl fmt::Display for DepthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthTier::Hub => write!(f, "hub"),
            DepthTier::Branch => write!(f, "branch"),
            DepthTier::Leaf => write!(f, "leaf"),
            DepthTier::Deep => write!(f, "deep"),
        }
    }
}

/// Marker and label styling for one depth tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthStyle {
    pub tier: DepthTier,
    /// Circle radius for hub and dot markers; half the height for pills
    pub marker_radius: f64,
    pub marker_opacity: f64,
    pub font_size: u32,
    pub font_weight: Option<&'static str>,
    pub text_color: &'static str,
    /// Horizontal gap between a dot and its left-aligned label (0 = centered)
    pub label_offset: f64,
}

impl DepthStyle {
    /// Lookup table from depth to style
    pub fn for_depth(depth: usize) -> Self {
        match DepthTier::for_depth(depth) {
            DepthTier::Hub => Self {
                tier: DepthTier::Hub,
                marker_radius: 60.0,
                marker_opacity: 1.0,
                font_size: 28,
                font_weight: Some("bold"),
                text_color: "#111",
                label_offset: 0.0,
            },
            DepthTier::Branch => Self {
                tier: DepthTier::Branch,
                marker_radius: 20.0,
                marker_opacity: 0.2,
                font_size: 22,
                font_weight: Some("600"),
                text_color: "#222",
                label_offset: 0.0,
            },
            DepthTier::Leaf => Self {
                tier: DepthTier::Leaf,
                marker_radius: 5.0,
                marker_opacity: 0.6,
                font_size: 18,
                font_weight: None,
                text_color: "#333",
                label_offset: 10.0,
            },
            DepthTier::Deep => Self {
                tier: DepthTier::Deep,
                marker_radius: 3.0,
                marker_opacity: 0.4,
                font_size: 14,
                font_weight: None,
                text_color: "#555",
                label_offset: 8.0,
            },
        }
    }
}

/// Stroke styling for the connector leading into a node at `depth`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    pub opacity: f64,
    pub stroke_width: f64,
}

impl EdgeStyle {
    /// Edges fade and thin out as the child gets deeper
    pub fn for_depth(depth: usize) -> Self {
        let depth = depth as f64;
        Self {
            opacity: hundredths((0.6 - depth * 0.12).max(0.15)),
            stroke_width: hundredths((4.0 - depth * 0.8).max(1.0)),
        }
    }
}

/// Snap to two decimals so `3 * 0.8` prints as `2.4`
fn hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Configuration shared by layout and rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub palette: Palette,
}

impl RenderConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            palette: Palette::default(),
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Center of the canvas, where the root is pinned
    pub fn center(&self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Reject canvases with no area
    pub fn validate(&self) -> Result<(), MindmapError> {
        if self.width == 0 || self.height == 0 {
            return Err(MindmapError::invalid_config(format!(
                "canvas must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.palette.is_empty() {
            return Err(MindmapError::invalid_palette("palette needs at least one color"));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
