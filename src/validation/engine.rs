//! Validation Engine
//!
//! Drives the section tracker and keyword checker over a whole document.
//! Every pass re-scans the full text; a pass never fails on document content.

use serde::Serialize;

use crate::dictionary::KeywordDictionary;
use crate::parser::strip_bom;

use super::checker::{KeywordChecker, SOURCE};
use super::tracker::{SectionTracker, TrackedLine};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
}

/// A finding at an exact location. Line and columns are zero-based,
/// columns count chars and the end is exclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub start_column: usize,
    pub end_column: usize,
    pub message: String,
    pub severity: Severity,
    pub source: &'static str,
}

impl Diagnostic {
    pub fn warning(line: usize, start_column: usize, end_column: usize, message: String) -> Self {
        Self {
            line,
            start_column,
            end_column,
            message,
            severity: Severity::Warning,
            source: SOURCE,
        }
    }
}

/// Result of validating a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// No findings at all
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Validate one line given the section it belongs to
pub fn validate_line(
    line_idx: usize,
    line: &str,
    tracked: TrackedLine,
    checker: &KeywordChecker<'_>,
) -> Option<Diagnostic> {
    match tracked {
        TrackedLine::Content(Some(section)) => checker.check_line(line_idx, line, section),
        // Headers, ends, skipped lines and lines outside any section
        _ => None,
    }
}

/// Validate an entire document
pub fn validate_document(content: &str, dictionary: &KeywordDictionary) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut tracker = SectionTracker::new();
    let checker = KeywordChecker::new(dictionary);
    let content = strip_bom(content);

    for (line_idx, line) in content.lines().enumerate() {
        let tracked = tracker.observe(line);
        if let Some(diagnostic) = validate_line(line_idx, line, tracked, &checker) {
            result.push(diagnostic);
        }
    }

    log::trace!(
        "Validated {} lines, {} findings",
        content.lines().count(),
        result.diagnostics.len()
    );

    result
}
