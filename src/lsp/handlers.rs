use tower_lsp::jsonrpc::Result as LspResult;
use tower_lsp::lsp_types::*;

use crate::core::Document;
use crate::lsp::backend::Backend;
use crate::validation::{section_outline, SectionSpan, Severity};

/// Trait for handling document symbols
#[tower_lsp::async_trait]
pub trait HandleDocumentSymbol {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>>;
}

/// Trait for handling diagnostics
#[tower_lsp::async_trait]
pub trait HandleDiagnostics {
    async fn publish_diagnostics(&self, uri: Url);
}

#[tower_lsp::async_trait]
impl HandleDiagnostics for Backend {
    /// Validate the stored text of a document and publish the findings
    async fn publish_diagnostics(&self, uri: Url) {
        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state.clone(),
            None => return,
        };
        drop(docs);

        let document = Document::sif(uri.as_str(), doc_state.content);
        let findings = self.validator.validate(&document).unwrap_or_default();

        let diagnostics = findings.into_iter().map(to_lsp_diagnostic).collect();

        self.client
            .publish_diagnostics(uri, diagnostics, doc_state.version)
            .await;
    }
}

/// Convert a finding into an LSP diagnostic with its exact range
pub fn to_lsp_diagnostic(finding: crate::validation::Diagnostic) -> Diagnostic {
    let severity = match finding.severity {
        Severity::Warning => DiagnosticSeverity::WARNING,
    };

    Diagnostic::new(
        Range::new(
            Position::new(finding.line as u32, finding.start_column as u32),
            Position::new(finding.line as u32, finding.end_column as u32),
        ),
        Some(severity),
        None,
        Some(finding.source.to_string()),
        finding.message,
        None,
        None,
    )
}

#[tower_lsp::async_trait]
impl HandleDocumentSymbol for Backend {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>> {
        let uri = params.text_document.uri;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        let lines: Vec<&str> = doc_state.content.lines().collect();
        let symbols = section_outline(&doc_state.content)
            .into_iter()
            .map(|span| section_symbol(&span, &lines))
            .collect();

        Ok(Some(DocumentSymbolResponse::Nested(symbols)))
    }
}

/// Length of a line in UTF-16 code units, the LSP position encoding
fn utf16_len(lines: &[&str], line_idx: usize) -> u32 {
    lines
        .get(line_idx)
        .map(|l| l.encode_utf16().count() as u32)
        .unwrap_or(0)
}

/// One symbol per section block
fn section_symbol(span: &SectionSpan, lines: &[&str]) -> DocumentSymbol {
    let range = Range::new(
        Position::new(span.start_line as u32, 0),
        Position::new(span.end_line as u32, utf16_len(lines, span.end_line)),
    );
    let selection_range = Range::new(
        Position::new(span.start_line as u32, 0),
        Position::new(span.start_line as u32, utf16_len(lines, span.start_line)),
    );

    DocumentSymbol {
        name: span.title.clone(),
        detail: span.section.map(|s| s.as_str().to_string()),
        kind: SymbolKind::NAMESPACE,
        tags: None,
        #[allow(deprecated)]
        deprecated: Some(false), // Required by tower-lsp 0.20, use tags instead in future versions
        range,
        selection_range,
        children: None,
    }
}
