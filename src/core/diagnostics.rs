//! Diagnostic Store
//!
//! Findings per document. Each pass replaces the whole list for its document.

use std::collections::HashMap;

use crate::validation::Diagnostic;

#[derive(Debug, Default)]
pub struct DiagnosticStore {
    findings: HashMap<String, Vec<Diagnostic>>,
}

impl DiagnosticStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every finding of a document. Nothing is merged.
    pub fn replace(&mut self, id: &str, diagnostics: Vec<Diagnostic>) {
        self.findings.insert(id.to_string(), diagnostics);
    }

    pub fn get(&self, id: &str) -> Option<&[Diagnostic]> {
        self.findings.get(id).map(|d| d.as_slice())
    }

    /// Drop a closed document
    pub fn remove(&mut self, id: &str) -> Option<Vec<Diagnostic>> {
        self.findings.remove(id)
    }

    /// Number of documents with a stored result
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}
