//! WebAssembly bindings for mindmark
//!
//! Browser-friendly wrappers around the outline → SVG pipeline.

use wasm_bindgen::prelude::*;

use crate::core::{Database, Palette, RenderConfig};
use crate::plugins::Orchestrator;

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

/// Render an outline to an SVG mindmap
///
/// Throws a JavaScript error when the canvas is zero-sized.
#[wasm_bindgen]
pub fn render_mindmap(input: &str, width: u32, height: u32) -> Result<String, JsValue> {
    let config = RenderConfig::new(width, height);
    crate::render_with_config(input, &config).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render an outline with a comma-separated branch palette
#[wasm_bindgen]
pub fn render_mindmap_with_palette(
    input: &str,
    width: u32,
    height: u32,
    palette: &str,
) -> Result<String, JsValue> {
    let palette: Palette = palette
        .parse()
        .map_err(|e: crate::core::MindmapError| JsValue::from_str(&e.to_string()))?;
    let config = RenderConfig::new(width, height).with_palette(palette);
    crate::render_with_config(input, &config).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse an outline and return a JSON summary of the tree
///
/// Fields: `node_count`, `edge_count`, `max_depth`, `root`, `branches`.
#[wasm_bindgen]
pub fn outline_summary(input: &str) -> Result<String, JsValue> {
    let database = Orchestrator::new()
        .parse(input)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let branches: Vec<&str> = database
        .main_branches()
        .iter()
        .map(|&id| database.label(id))
        .collect();

    let summary = serde_json::json!({
        "node_count": database.node_count(),
        "edge_count": database.edge_count(),
        "max_depth": database.max_depth(),
        "root": database.label(database.root()),
        "branches": branches,
    });

    serde_json::to_string(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
}
