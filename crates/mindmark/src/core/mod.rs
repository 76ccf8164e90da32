//! Core abstractions for diagram processing
//!
//! This module defines the traits every pipeline stage implements
//! (parse → layout → render) together with the shared types, errors,
//! logging setup and text helpers they rely on.

mod database;
mod error;
mod layout;
pub mod logging;
mod parser;
mod renderer;
mod text;
mod types;

pub use database::*;
pub use error::*;
pub use layout::*;
pub use logging::*;
pub use parser::*;
pub use renderer::*;
pub use text::*;
pub use types::*;
