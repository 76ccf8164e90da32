//! Plugin implementations for different diagram types
//!
//! Each plugin implements the core traits for its specific diagram type;
//! the orchestrator chains them into a complete pipeline.

pub mod mindmap;
pub mod orchestrator;

pub use mindmap::*;
pub use orchestrator::*;
