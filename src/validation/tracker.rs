//! Section Tracker
//!
//! Follows which section is open while a document is scanned top to bottom.
//! One tracker per pass; nothing is shared between documents.

use crate::parser::{classify_line, LineKind, SectionId};

/// What the tracker made of a line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackedLine {
    /// Blank or comment line, state unchanged
    Skipped,
    /// Block header; carries the newly active section (None if unmapped)
    Header(Option<SectionId>),
    /// Block end; no section is active afterwards
    End,
    /// Any other line, with the section it belongs to
    Content(Option<SectionId>),
}

/// State machine over {no section} and one state per section
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    current: Option<SectionId>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active section
    pub fn current(&self) -> Option<SectionId> {
        self.current
    }

    /// Feed the next line and update the active section.
    ///
    /// A header inside an open section replaces it; the last header wins.
    pub fn observe(&mut self, line: &str) -> TrackedLine {
        match classify_line(line) {
            LineKind::Empty | LineKind::Comment => TrackedLine::Skipped,
            LineKind::BlockHeader(header) => {
                self.current = header.section();
                TrackedLine::Header(self.current)
            }
            LineKind::BlockEnd => {
                self.current = None;
                TrackedLine::End
            }
            LineKind::Content => TrackedLine::Content(self.current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let tracker = SectionTracker::new();
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn test_open_and_close() {
        let mut tracker = SectionTracker::new();
        assert_eq!(
            tracker.observe("Solver 2"),
            TrackedLine::Header(Some(SectionId::Solver))
        );
        assert_eq!(
            tracker.observe("  Equation = Heat Equation"),
            TrackedLine::Content(Some(SectionId::Solver))
        );
        assert_eq!(tracker.observe("End"), TrackedLine::End);
        assert_eq!(tracker.current(), None);
        assert_eq!(tracker.observe("Density = 1"), TrackedLine::Content(None));
    }

    #[test]
    fn test_blank_and_comment_keep_section() {
        let mut tracker = SectionTracker::new();
        tracker.observe("Material 1");
        assert_eq!(tracker.observe(""), TrackedLine::Skipped);
        assert_eq!(tracker.observe("  ! End"), TrackedLine::Skipped);
        assert_eq!(tracker.current(), Some(SectionId::Material));
    }

    #[test]
    fn test_last_header_wins() {
        let mut tracker = SectionTracker::new();
        tracker.observe("Body Force 1");
        assert_eq!(tracker.current(), Some(SectionId::BodyForce));
        tracker.observe("Initial Condition 1");
        assert_eq!(tracker.current(), Some(SectionId::InitialCondition));
    }

    #[test]
    fn test_end_outside_section_is_harmless() {
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.observe("END"), TrackedLine::End);
        assert_eq!(tracker.current(), None);
    }
}
