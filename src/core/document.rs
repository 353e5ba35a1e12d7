//! Document Model
//!
//! A snapshot of one document as handed over by the host.

/// Language id of documents this crate validates
pub const LANGUAGE_ID: &str = "elmer";

/// Full text of one document plus its identity
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Key of the findings store (an URI for the language server, a path for the checker)
    pub id: String,
    pub language_id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, language_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            language_id: language_id.into(),
            text: text.into(),
        }
    }

    /// Document declared as an Elmer SIF file
    pub fn sif(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, LANGUAGE_ID, text)
    }

    /// Whether this document is subject to validation
    pub fn is_sif(&self) -> bool {
        self.language_id == LANGUAGE_ID
    }
}
