use tower_lsp::jsonrpc::Result as LspResult;
use tower_lsp::lsp_types::*;

use crate::lsp::backend::Backend;
use crate::report::{check_input, leading_line_offset};
use crate::validation::engine::analyze;
use crate::vocabulary::{classify_word, WordClass, FUNCTIONS, KEYWORDS};

pub type LspDiagnostic = tower_lsp::lsp_types::Diagnostic;

/// Diagnostic source shown by editors
pub const DIAGNOSTIC_SOURCE: &str = "zlang";

/// Trait for handling hover requests
#[tower_lsp::async_trait]
pub trait HandleHover {
    async fn handle_hover(&self, params: HoverParams) -> LspResult<Option<Hover>>;
}

/// Trait for handling completion requests
#[tower_lsp::async_trait]
pub trait HandleCompletion {
    async fn handle_completion(
        &self,
        params: CompletionParams,
    ) -> LspResult<Option<CompletionResponse>>;
}

/// Trait for handling diagnostics
#[tower_lsp::async_trait]
pub trait HandleDiagnostics {
    async fn publish_diagnostics(&self, uri: Url);
}

#[tower_lsp::async_trait]
impl HandleHover for Backend {
    async fn handle_hover(&self, params: HoverParams) -> LspResult<Option<Hover>> {
        let tdpp = params.text_document_position_params;
        let uri = tdpp.text_document.uri;
        let pos = tdpp.position;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        Ok(doc_state
            .word_at(pos.line as usize, pos.character as usize)
            .and_then(hover_for_word))
    }
}

#[tower_lsp::async_trait]
impl HandleCompletion for Backend {
    async fn handle_completion(
        &self,
        params: CompletionParams,
    ) -> LspResult<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let pos = params.text_document_position.position;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        let prefix = doc_state.prefix_at(pos.line as usize, pos.character as usize);
        let completions = completion_items(prefix);

        if completions.is_empty() {
            Ok(None)
        } else {
            Ok(Some(CompletionResponse::Array(completions)))
        }
    }
}

#[tower_lsp::async_trait]
impl HandleDiagnostics for Backend {
    /// Publish diagnostics for a document
    async fn publish_diagnostics(&self, uri: Url) {
        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return,
        };

        let content = &doc_state.content;
        let diagnostics: Vec<LspDiagnostic> = match check_input(content) {
            Ok(text) => {
                let offset = leading_line_offset(content);
                analyze(text)
                    .iter()
                    .map(|d| to_lsp_diagnostic(d, content, offset))
                    .collect()
            }
            Err(e) => {
                log::debug!("{}: {}", uri, e);
                Vec::new()
            }
        };
        let version = Some(doc_state.version);
        drop(docs);

        self.client
            .publish_diagnostics(uri, diagnostics, version)
            .await;
    }
}

/// Markdown hover for a keyword or built-in function
pub fn hover_for_word(word: &str) -> Option<Hover> {
    let kind = match classify_word(word)? {
        WordClass::Keyword => "Z-LANG keyword",
        WordClass::Function => "Z-LANG built-in function",
    };

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: format!("**{}**\n\n{}", word, kind),
        }),
        range: None,
    })
}

/// Keywords then functions starting with `prefix`, ignoring case
pub fn completion_items(prefix: &str) -> Vec<CompletionItem> {
    let prefix = prefix.to_lowercase();
    let matches = |name: &&str| name.to_lowercase().starts_with(&prefix);

    let keywords = KEYWORDS.into_iter().filter(matches).map(|name| CompletionItem {
        label: name.to_string(),
        kind: Some(CompletionItemKind::KEYWORD),
        detail: Some("Z-LANG keyword".to_string()),
        ..Default::default()
    });
    let functions = FUNCTIONS.into_iter().filter(matches).map(|name| CompletionItem {
        label: name.to_string(),
        kind: Some(CompletionItemKind::FUNCTION),
        detail: Some("Z-LANG built-in function".to_string()),
        insert_text: Some(format!("{}($1)", name)),
        insert_text_format: Some(InsertTextFormat::SNIPPET),
        ..Default::default()
    });

    keywords.chain(functions).collect()
}

/// Convert an engine diagnostic into one spanning its whole document line
///
/// `line_offset` is the number of blank lines trimmed off the top of
/// `document` before analysis.
pub fn to_lsp_diagnostic(
    diagnostic: &crate::validation::engine::Diagnostic,
    document: &str,
    line_offset: usize,
) -> LspDiagnostic {
    let line_idx = diagnostic.line.saturating_sub(1) + line_offset;
    let width = document
        .split('\n')
        .nth(line_idx)
        .map_or(0, |line| line.trim_end_matches('\r').encode_utf16().count());

    LspDiagnostic {
        range: Range::new(
            Position::new(line_idx as u32, 0),
            Position::new(line_idx as u32, width as u32),
        ),
        severity: Some(DiagnosticSeverity::ERROR),
        code: Some(NumberOrString::String(diagnostic.rule.code().to_string())),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: diagnostic.description.clone(),
        ..Default::default()
    }
}
