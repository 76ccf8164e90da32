//! Core parser trait for diagram markup
//!
//! This trait defines the interface for parsing diagram markup language
//! into structured data that can be stored in a database.

use anyhow::Result;

use super::Database;

/// Core trait for diagram parsers
///
/// This trait represents the parsing layer that converts diagram markup
/// into structured data. Each diagram type has its own parser implementation.
///
/// # Example
/// ```
/// use mindmark::core::{Database, Parser};
/// use mindmark::plugins::mindmap::{MindmapDatabase, OutlineParser};
///
/// let parser = OutlineParser::new();
/// let mut db = MindmapDatabase::new();
/// parser.parse("# Root\n- child", &mut db).unwrap();
/// assert_eq!(db.node_count(), 2);
/// ```
pub trait Parser<D: Database>: Send + Sync {
    /// Parse diagram markup into the provided database
    fn parse(&self, input: &str, database: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input contains anything this parser would pick up
    fn can_parse(&self, input: &str) -> bool;
}
