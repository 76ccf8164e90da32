//! Outline line grammar
//!
//! Every outline line is one of:
//! - a heading: 1-6 `#`, at least one whitespace character, then text
//! - a bullet: optional indentation, `-` or `*`, at least one whitespace
//!   character, then text
//!
//! Anything else is not part of the outline.

use chumsky::prelude::*;

/// Deepest heading level (`######`)
pub const MAX_HEADING_LEVEL: usize = 6;

/// Rank of an unindented bullet; every two columns of indentation add one
pub const BULLET_BASE_RANK: usize = MAX_HEADING_LEVEL + 1;

/// Which grammar a line matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Bullet,
}

/// A classified outline line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineLine<'a> {
    pub kind: LineKind,
    /// Nesting rank used to decide parent/child relations
    pub rank: usize,
    /// Trimmed item text
    pub label: &'a str,
}

/// Classify one line, returning `None` for lines that are neither a
/// heading nor a bullet.
///
/// # Example
/// ```
/// use mindmark::plugins::mindmap::{classify_line, LineKind};
///
/// let line = classify_line("    - nested item").unwrap();
/// assert_eq!(line.kind, LineKind::Bullet);
/// assert_eq!(line.rank, 9);
/// assert_eq!(line.label, "nested item");
///
/// assert!(classify_line("plain prose").is_none());
/// ```
pub fn classify_line(line: &str) -> Option<OutlineLine<'_>> {
    heading_parser()
        .or(bullet_parser())
        .parse(line.trim_end())
        .into_result()
        .ok()
}

fn space<'src>() -> impl Parser<'src, &'src str, char> + Clone {
    any().filter(|c: &char| c.is_whitespace())
}

fn rest_of_line<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    any().repeated().at_least(1).to_slice()
}

fn heading_parser<'src>() -> impl Parser<'src, &'src str, OutlineLine<'src>> + Clone {
    just('#')
        .repeated()
        .at_least(1)
        .at_most(MAX_HEADING_LEVEL)
        .to_slice()
        .then_ignore(space().repeated().at_least(1))
        .then(rest_of_line())
        .then_ignore(end())
        .map(|(hashes, text): (&'src str, &'src str)| OutlineLine {
            kind: LineKind::Heading,
            rank: hashes.len(),
            label: text.trim(),
        })
}

fn bullet_parser<'src>() -> impl Parser<'src, &'src str, OutlineLine<'src>> + Clone {
    space()
        .repeated()
        .to_slice()
        .then_ignore(one_of("-*"))
        .then_ignore(space().repeated().at_least(1))
        .then(rest_of_line())
        .then_ignore(end())
        .map(|(indent, text): (&'src str, &'src str)| OutlineLine {
            kind: LineKind::Bullet,
            rank: BULLET_BASE_RANK + indent.chars().count() / 2,
            label: text.trim(),
        })
}
