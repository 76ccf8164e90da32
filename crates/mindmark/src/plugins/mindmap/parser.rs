//! Outline parser implementation
//!
//! Turns heading/bullet outlines into a [`MindmapDatabase`] tree. Nesting
//! is inferred with a stack of open ancestors: an item closes every open
//! ancestor whose rank is greater than or equal to its own, then becomes
//! the last child of whatever remains on top.

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use super::syntax::classify_line;
use super::MindmapDatabase;
use crate::core::{Database, NodeId, Parser};

/// Outline parser implementation
pub struct OutlineParser;

impl OutlineParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OutlineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<MindmapDatabase> for OutlineParser {
    /// Parse `input`, replacing any previous contents of `database`.
    ///
    /// Never fails on text input: unrecognized lines are skipped and an
    /// outline with no items yields a hub-only diagram.
    fn parse(&self, input: &str, database: &mut MindmapDatabase) -> Result<()> {
        let parse_span = span!(Level::INFO, "parse_outline", input_len = input.len());
        let _enter = parse_span.enter();

        trace!("Starting outline parsing");
        database.clear();

        let mut open: Vec<NodeId> = vec![MindmapDatabase::HUB];
        let mut skipped = 0usize;

        for (line_no, raw) in input.lines().enumerate() {
            let line = raw.trim_end();
            if line.is_empty() {
                continue;
            }

            let Some(item) = classify_line(line) else {
                trace!(line = line_no + 1, "Skipping line that is neither heading nor bullet");
                skipped += 1;
                continue;
            };

            while open.len() > 1 {
                match open.last() {
                    Some(&top) if database.level(top) >= item.rank => {
                        open.pop();
                    }
                    _ => break,
                }
            }

            let parent = open.last().copied().unwrap_or(MindmapDatabase::HUB);
            let id = database.add_child(parent, item.label, item.rank)?;
            open.push(id);
        }

        database.collapse_root();

        debug!(skipped, "Ignored non-outline lines");
        info!(
            node_count = database.node_count(),
            edge_count = database.edge_count(),
            synthetic_root = database.has_synthetic_root(),
            "Outline parsing completed"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "outline"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        input.lines().any(|line| classify_line(line).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> MindmapDatabase {
        let mut db = MindmapDatabase::new();
        OutlineParser::new().parse(input, &mut db).unwrap();
        db
    }

    fn labels(db: &MindmapDatabase, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|&id| db.label(id).to_string()).collect()
    }

    #[test]
    fn test_parser_metadata() {
        let parser = OutlineParser::new();
        assert_eq!(parser.name(), "outline");
        assert_eq!(parser.version(), "0.1.0");
        assert!(parser.can_parse("text\n- item"));
        assert!(!parser.can_parse("just prose"));
    }

    #[test]
    fn test_headings_and_bullets_nest() {
        let db = parse("# A\n## B\n- C\n- D");
        let root = db.root();
        assert_eq!(db.label(root), "A");

        let b = db.children(root)[0];
        assert_eq!(db.label(b), "B");
        assert_eq!(labels(&db, db.children(b)), vec!["C", "D"]);
    }

    #[test]
    fn test_same_rank_becomes_sibling() {
        let db = parse("# Root\n## X\n## Y");
        assert_eq!(db.label(db.root()), "Root");
        assert_eq!(labels(&db, db.main_branches()), vec!["X", "Y"]);
    }

    #[test]
    fn test_shallower_heading_closes_bullets() {
        let db = parse("# Root\n## One\n- a\n  - a1\n## Two\n- b");
        let branches = db.main_branches();
        assert_eq!(labels(&db, branches), vec!["One", "Two"]);
        let a = db.children(branches[0])[0];
        assert_eq!(labels(&db, db.children(a)), vec!["a1"]);
        assert_eq!(labels(&db, db.children(branches[1])), vec!["b"]);
    }

    #[test]
    fn test_two_top_level_headings_keep_hub() {
        let db = parse("# First\n# Second");
        assert!(db.has_synthetic_root());
        assert_eq!(db.label(db.root()), "");
        assert_eq!(labels(&db, db.main_branches()), vec!["First", "Second"]);
    }

    #[test]
    fn test_bullets_only_outline() {
        let db = parse("- one\n  - one.a\n- two");
        assert!(db.has_synthetic_root());
        assert_eq!(labels(&db, db.main_branches()), vec!["one", "two"]);
    }

    #[test]
    fn test_single_bullet_becomes_root() {
        let db = parse("- lonely\n  - child");
        assert_eq!(db.label(db.root()), "lonely");
        assert_eq!(db.node_count(), 2);
    }

    #[test]
    fn test_empty_and_unmatched_input() {
        for input in ["", "   \n\t\n", "no outline here\nnor here"] {
            let db = parse(input);
            assert!(db.has_synthetic_root());
            assert_eq!(db.node_count(), 1);
        }
    }

    #[test]
    fn test_deeper_jump_attaches_to_nearest_open_item() {
        // A bullet indented far beyond its predecessor still nests one level down
        let db = parse("# Root\n- a\n        - deep");
        let a = db.main_branches()[0];
        assert_eq!(labels(&db, db.children(a)), vec!["deep"]);
        assert_eq!(db.depth_of(db.children(a)[0]), Some(2));
    }

    #[test]
    fn test_heading_after_bullets_in_other_subtree() {
        // A level-3 heading closes bullets (rank >= 7) but stays under the level-2 heading
        let db = parse("# R\n## S\n- x\n### T");
        let s = db.main_branches()[0];
        assert_eq!(labels(&db, db.children(s)), vec!["x", "T"]);
    }

    #[test]
    fn test_windows_line_endings() {
        let db = parse("# Root\r\n- a\r\n- b\r\n");
        assert_eq!(labels(&db, db.main_branches()), vec!["a", "b"]);
    }

    #[test]
    fn test_reparse_replaces_contents() {
        let mut db = MindmapDatabase::new();
        let parser = OutlineParser::new();
        parser.parse("# A\n- x\n- y", &mut db).unwrap();
        parser.parse("# B", &mut db).unwrap();
        assert_eq!(db.label(db.root()), "B");
        assert_eq!(db.node_count(), 1);
    }
}
