//! Validation Engine
//!
//! Section tracking and keyword checking, separated from parsing and LSP concerns.

pub mod checker;
pub mod engine;
pub mod outline;
pub mod tracker;

pub use checker::{KeywordChecker, COMMON_KEYWORDS, SOURCE};
pub use engine::{validate_document, validate_line, Diagnostic, Severity, ValidationResult};
pub use outline::{section_outline, SectionSpan};
pub use tracker::{SectionTracker, TrackedLine};
