//! Keyword normalization helpers shared by the lexer, checker and dictionary.

use std::sync::LazyLock;

use regex::Regex;

static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[0-9]+$").expect("trailing number pattern is valid"));

/// Lower-case, collapse whitespace runs to a single space, trim
pub fn normalize_keyword(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Collapse a trailing numeric suffix to ` 1` ("mask name 2" -> "mask name 1").
///
/// Applies to any keyword ending in a space-separated number, whether or not
/// a numbered family exists in the dictionary.
pub fn base_keyword(normalized: &str) -> String {
    TRAILING_NUMBER.replace(normalized, " 1").into_owned()
}
