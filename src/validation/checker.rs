//! Keyword Checker
//!
//! Decides whether the keyword of one line is recognized in the active section.

use crate::dictionary::KeywordDictionary;
use crate::parser::{base_keyword, extract_keyword, SectionId};

use super::engine::Diagnostic;

/// Keywords valid in every section, never looked up
pub const COMMON_KEYWORDS: [&str; 2] = ["name", "end"];

/// Source tag attached to every finding
pub const SOURCE: &str = "elmer";

/// Per-line keyword lookup against the reference dictionary
#[derive(Debug, Clone, Copy)]
pub struct KeywordChecker<'a> {
    dictionary: &'a KeywordDictionary,
}

impl<'a> KeywordChecker<'a> {
    pub fn new(dictionary: &'a KeywordDictionary) -> Self {
        Self { dictionary }
    }

    /// Check one line of an open section. Returns a warning for an unknown keyword.
    pub fn check_line(&self, line_idx: usize, line: &str, section: SectionId) -> Option<Diagnostic> {
        // Sections missing from the dictionary are not checked at all
        if self.dictionary.section(section.as_str()).is_none() {
            return None;
        }

        let token = extract_keyword(line)?;
        if COMMON_KEYWORDS.contains(&token.normalized.as_str()) {
            return None;
        }
        if self.is_known(section, &token.normalized) {
            return None;
        }

        Some(Diagnostic::warning(
            line_idx,
            token.start,
            token.end,
            format!(
                "Unknown keyword \"{}\" in {} section",
                token.raw,
                section.as_str().to_uppercase()
            ),
        ))
    }

    /// Lookup order: section, section with numbered base, any section, any section with base
    pub fn is_known(&self, section: SectionId, normalized: &str) -> bool {
        let base = base_keyword(normalized);
        let id = section.as_str();

        self.dictionary.contains(id, normalized)
            || self.dictionary.contains(id, &base)
            || self.dictionary.contains_anywhere(normalized)
            || self.dictionary.contains_anywhere(&base)
    }
}
