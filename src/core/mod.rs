//! Core Business Logic
//!
//! Documents, the findings store and the validate operation, independent of any host.

pub mod diagnostics;
pub mod document;
pub mod validator;

pub use diagnostics::DiagnosticStore;
pub use document::{Document, LANGUAGE_ID};
pub use validator::Validator;
