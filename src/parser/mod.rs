//! SIF Parser
//!
//! Line-level recognition for Elmer solver input files. No value parsing:
//! lines are classified structurally and assignment lines yield a keyword token.

pub mod ast;
pub mod lexer;
pub mod normalize;

pub use ast::{KeywordToken, LineKind, SectionHeader, SectionId};
pub use lexer::{classify_line, extract_keyword, match_block_header, strip_bom};
pub use normalize::{base_keyword, normalize_keyword};

/// Parse a single line of a SIF document
///
/// Convenience entry point pairing the structural classification with the
/// keyword token, when the line has one.
pub fn parse_line(line: &str) -> (LineKind, Option<KeywordToken>) {
    match lexer::classify_line(line) {
        LineKind::Content => (LineKind::Content, lexer::extract_keyword(line)),
        other => (other, None),
    }
}
