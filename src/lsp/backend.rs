use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::core::{Validator, LANGUAGE_ID};
use crate::dictionary::KeywordDictionary;
use crate::lsp::document::DocumentState;
use crate::lsp::handlers::{HandleDiagnostics, HandleDocumentSymbol};
use crate::Config;

/// The main LSP backend that holds state and implements the Language Server Protocol
pub struct Backend {
    pub client: Client,
    pub validator: Arc<Validator>,
    pub documents: Arc<Mutex<HashMap<Url, DocumentState>>>,
    pub config: Config,
    /// Dictionary load failure, reported to the client once initialized
    pub startup_error: Option<String>,
}

impl Backend {
    pub fn new(
        client: Client,
        config: Config,
        dictionary: KeywordDictionary,
        startup_error: Option<String>,
    ) -> Self {
        Self {
            client,
            validator: Arc::new(Validator::new(Arc::new(dictionary))),
            documents: Arc::new(Mutex::new(HashMap::new())),
            config,
            startup_error,
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(
        &self,
        _: InitializeParams,
    ) -> tower_lsp::jsonrpc::Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                document_symbol_provider: Some(OneOf::Left(true)),
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::FULL),
                        save: Some(TextDocumentSyncSaveOptions::SaveOptions(SaveOptions {
                            include_text: Some(true),
                        })),
                        ..Default::default()
                    },
                )),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "sif-ls".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "sif-ls initialized")
            .await;

        if let Some(error) = &self.startup_error {
            self.client
                .show_message(
                    MessageType::ERROR,
                    format!("Keyword dictionary unavailable, validation disabled: {}", error),
                )
                .await;
        }
    }

    async fn shutdown(&self) -> tower_lsp::jsonrpc::Result<()> {
        Ok(())
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> tower_lsp::jsonrpc::Result<Option<DocumentSymbolResponse>> {
        self.handle_document_symbol(params).await
    }

    // Only SIF documents are tracked; everything else is ignored
    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let item = params.text_document;
        if item.language_id != LANGUAGE_ID {
            log::debug!("Ignoring {} ({})", item.uri, item.language_id);
            return;
        }

        let doc_state = DocumentState {
            content: item.text,
            version: Some(item.version),
        };

        let mut docs = self.documents.lock().await;
        docs.insert(item.uri.clone(), doc_state);
        drop(docs); // Release the lock before calling publish_diagnostics

        self.publish_diagnostics(item.uri).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let Some(change) = params.content_changes.into_iter().last() else {
            return;
        };

        let mut docs = self.documents.lock().await;
        let Some(doc_state) = docs.get_mut(&uri) else {
            return;
        };
        // Full sync: the last change carries the whole text
        doc_state.content = change.text;
        doc_state.version = Some(params.text_document.version);
        drop(docs);

        self.publish_diagnostics(uri).await;
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        let uri = params.text_document.uri;

        let mut docs = self.documents.lock().await;
        let Some(doc_state) = docs.get_mut(&uri) else {
            return;
        };
        if let Some(text) = params.text {
            doc_state.content = text;
        }
        drop(docs);

        self.publish_diagnostics(uri).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        let removed = self.documents.lock().await.remove(&uri);
        if removed.is_some() {
            self.validator.forget(uri.as_str());
            self.client.publish_diagnostics(uri, Vec::new(), None).await;
        }
    }
}
