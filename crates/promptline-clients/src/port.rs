//! Port trait implementations for the collaborator clients.
//!
//! Maps the internal `ClientError` onto the core `CollaboratorError` so the
//! pipelines never see transport details.

use async_trait::async_trait;
use promptline_core::{
    CollaboratorError, CompletionPort, CompletionRequest, ContentSafetyPort, GrammarAnalyzerPort,
    GrammarResult, SafetyVerdict,
};
use tracing::debug;

use crate::client::{CompletionClient, ContentSafetyClient, LanguageClient};
use crate::error::ClientError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ClientError` to core `CollaboratorError`.
fn map_error(err: ClientError) -> CollaboratorError {
    match err {
        ClientError::NotConfigured { service } => {
            CollaboratorError::NotConfigured(format!("{service} credentials"))
        }
        err @ ClientError::InvalidEndpoint { .. } => {
            CollaboratorError::NotConfigured(err.to_string())
        }
        ClientError::ApiRequestFailed { status, message } => {
            CollaboratorError::Status { status, message }
        }
        ClientError::Timeout(after) => CollaboratorError::Timeout(after),
        ClientError::InvalidResponse { message } => CollaboratorError::InvalidResponse(message),
        ClientError::Network(e) => CollaboratorError::Transport(e.to_string()),
        ClientError::JsonParse(e) => CollaboratorError::InvalidResponse(e.to_string()),
    }
}

// ============================================================================
// Port Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ContentSafetyPort for ContentSafetyClient<B> {
    async fn classify(&self, text: &str) -> Result<SafetyVerdict, CollaboratorError> {
        let verdict = self.analyze(text).await.map_err(map_error)?;
        debug!(flagged = verdict.flagged, "content safety verdict");
        Ok(verdict)
    }
}

#[async_trait]
impl<B: HttpBackend> GrammarAnalyzerPort for LanguageClient<B> {
    async fn analyze(&self, text: &str) -> Result<GrammarResult, CollaboratorError> {
        let result = Self::analyze(self, text).await.map_err(map_error)?;
        debug!(
            language = %result.detected_language,
            issues = result.issues.len(),
            "language analysis"
        );
        Ok(result)
    }
}

#[async_trait]
impl<B: HttpBackend> CompletionPort for CompletionClient<B> {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CollaboratorError> {
        Self::complete(self, request).await.map_err(map_error)
    }
}
