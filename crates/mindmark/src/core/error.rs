//! Core error types for diagram processing
//!
//! Parsing, layout and rendering are total over any text input, so the
//! only failures come from configuration and I/O.

use thiserror::Error;

/// Core error types for mindmap processing
#[derive(Error, Debug)]
pub enum MindmapError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid palette: {message}")]
    InvalidPalette { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl MindmapError {
    /// Create a new configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new palette error
    pub fn invalid_palette(message: impl Into<String>) -> Self {
        Self::InvalidPalette {
            message: message.into(),
        }
    }
}
