//! Elmer SIF Language Server
//!
//! Section-aware keyword validation for Elmer solver input files.
//!
//! This library provides:
//! - SIF line recognition (block headers, block ends, keyword assignments)
//! - Section tracking and keyword checking against a reference dictionary
//! - A findings store keyed by document
//! - LSP protocol implementation and a batch checker
//! - Configuration management

pub mod check;
pub mod config;
pub mod core;
pub mod dictionary;
pub mod lsp;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use crate::core::{Document, Validator};
pub use dictionary::KeywordDictionary;
pub use parser::{parse_line, SectionId};
pub use validation::{validate_document, Diagnostic};
