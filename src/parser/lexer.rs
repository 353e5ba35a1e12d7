//! SIF Lexer
//!
//! Line classification for SIF files. Two independent pattern matchers:
//! the block-header/block-end recognizers used by the section tracker, and
//! the keyword extractor used by the checker.

use std::sync::LazyLock;

use regex::Regex;

use super::ast::{KeywordToken, LineKind, SectionHeader};
use super::normalize::normalize_keyword;

/// Block header: a section name, an optional integer index, nothing else
static BLOCK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(Header|Simulation|Constants|Equation|Solver|Material|Body\s+Force|Body|Boundary\s+Condition|Initial\s+Condition|Component|Boundary)(?:\s+([0-9]+))?\s*$",
    )
    .expect("block header pattern is valid")
});

static BLOCK_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*End\s*$").expect("block end pattern is valid"));

/// Keyword assignment: everything up to the first `(` or `=`.
/// Case-sensitive on purpose; only normalization folds case.
static KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z0-9\s\-\{\}]*?)(?:\s*\(|\s*=)")
        .expect("keyword pattern is valid")
});

/// Drop a leading byte-order mark so the first line is recognized
pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Classify a raw line of a SIF document
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::Empty;
    }
    if trimmed.starts_with('!') {
        return LineKind::Comment;
    }
    if let Some(header) = match_block_header(trimmed) {
        return LineKind::BlockHeader(header);
    }
    if BLOCK_END.is_match(trimmed) {
        return LineKind::BlockEnd;
    }

    LineKind::Content
}

/// Recognize a block-header line
pub fn match_block_header(text: &str) -> Option<SectionHeader> {
    let caps = BLOCK_HEADER.captures(text)?;
    let name = normalize_keyword(caps.get(1)?.as_str());
    let index = caps.get(2).map(|m| m.as_str().to_string());

    Some(SectionHeader { name, index })
}

/// Extract the keyword token from an assignment line.
///
/// Returns `None` when the line has no letter-led token followed by `=` or `(`.
pub fn extract_keyword(line: &str) -> Option<KeywordToken> {
    let caps = KEYWORD.captures(line)?;
    let raw = caps.get(1)?.as_str().trim();
    if raw.is_empty() {
        return None;
    }

    // Column of the first occurrence of the raw token, counted in chars
    let byte_start = line.find(raw)?;
    let start = line[..byte_start].chars().count();
    let end = start + raw.chars().count();

    Some(KeywordToken {
        raw: raw.to_string(),
        normalized: normalize_keyword(raw),
        start,
        end,
    })
}
