//! Validator
//!
//! `validate(document)`: one full pass, then an atomic replace of the
//! document's findings. Passes for different documents share only the
//! read-only dictionary.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::diagnostics::DiagnosticStore;
use crate::core::document::Document;
use crate::dictionary::KeywordDictionary;
use crate::validation::{validate_document, Diagnostic};

#[derive(Debug)]
pub struct Validator {
    dictionary: Arc<KeywordDictionary>,
    store: Mutex<DiagnosticStore>,
}

impl Validator {
    pub fn new(dictionary: Arc<KeywordDictionary>) -> Self {
        Self {
            dictionary,
            store: Mutex::new(DiagnosticStore::new()),
        }
    }

    /// Validate a document and replace its stored findings.
    ///
    /// Returns `None` for documents of another language; those are left alone.
    pub fn validate(&self, document: &Document) -> Option<Vec<Diagnostic>> {
        if !document.is_sif() {
            log::debug!("Skipping {} ({})", document.id, document.language_id);
            return None;
        }

        // Scan outside the lock; the last completed pass wins
        let diagnostics = validate_document(&document.text, &self.dictionary).diagnostics;
        self.store().replace(&document.id, diagnostics.clone());

        Some(diagnostics)
    }

    /// Current findings of a document
    pub fn findings(&self, id: &str) -> Vec<Diagnostic> {
        self.store().get(id).map(|d| d.to_vec()).unwrap_or_default()
    }

    /// Forget a closed document
    pub fn forget(&self, id: &str) {
        self.store().remove(id);
    }

    fn store(&self) -> MutexGuard<'_, DiagnosticStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
