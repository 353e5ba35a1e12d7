//! Section outline of a document, used for document symbols.

use crate::parser::{strip_bom, SectionId};

use super::tracker::{SectionTracker, TrackedLine};

/// Extent of one section block
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    /// Header text as written, trimmed (e.g. "Boundary Condition 2")
    pub title: String,
    pub section: Option<SectionId>,
    pub start_line: usize,
    /// Last line of the block (the `End` line when present)
    pub end_line: usize,
}

/// Collect the section blocks of a document.
///
/// A block ends at its `End`, at the line before the next header, or at the
/// last line of the document.
pub fn section_outline(content: &str) -> Vec<SectionSpan> {
    let mut spans = Vec::new();
    let mut open: Option<SectionSpan> = None;
    let mut tracker = SectionTracker::new();
    let mut last_line = 0;

    for (line_idx, line) in strip_bom(content).lines().enumerate() {
        last_line = line_idx;
        match tracker.observe(line) {
            TrackedLine::Header(section) => {
                if let Some(mut span) = open.take() {
                    span.end_line = line_idx.saturating_sub(1).max(span.start_line);
                    spans.push(span);
                }
                open = Some(SectionSpan {
                    title: line.trim().to_string(),
                    section,
                    start_line: line_idx,
                    end_line: line_idx,
                });
            }
            TrackedLine::End => {
                if let Some(mut span) = open.take() {
                    span.end_line = line_idx;
                    spans.push(span);
                }
            }
            TrackedLine::Skipped | TrackedLine::Content(_) => {}
        }
    }

    if let Some(mut span) = open {
        span.end_line = last_line;
        spans.push(span);
    }

    spans
}
