//! Azure AI Language client used for grammar/language analysis.
//!
//! Runs language detection on the prompt. The document's detected language
//! becomes `detected_language`; service warnings become `issues`.

use promptline_core::{GrammarResult, Issue, UNKNOWN_LANGUAGE};

use super::{from_body, to_body};
use crate::config::{ClientConfig, ServiceCredentials};
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpBackend, JsonPost, ReqwestBackend};
use crate::models::{LanguageRequest, LanguageResponse};
use crate::url::language_url;

const SERVICE: &str = "Language";

/// Code the service returns when no language could be detected.
const SERVICE_UNKNOWN: &str = "(Unknown)";

/// Language client using the reqwest backend.
pub type DefaultLanguageClient = LanguageClient<ReqwestBackend>;

pub struct LanguageClient<B: HttpBackend> {
    backend: B,
    credentials: Option<ServiceCredentials>,
}

impl DefaultLanguageClient {
    pub fn new(
        credentials: Option<ServiceCredentials>,
        config: &ClientConfig,
    ) -> ClientResult<Self> {
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
            credentials,
        })
    }
}

impl<B: HttpBackend> LanguageClient<B> {
    #[cfg(test)]
    pub(crate) const fn with_backend(credentials: Option<ServiceCredentials>, backend: B) -> Self {
        Self {
            backend,
            credentials,
        }
    }

    pub const fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    pub async fn analyze(&self, text: &str) -> ClientResult<GrammarResult> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ClientError::NotConfigured { service: SERVICE })?;

        let request = JsonPost::new(
            language_url(&credentials.endpoint)?,
            to_body(&LanguageRequest::detection(text))?,
        )
        .header("Ocp-Apim-Subscription-Key", credentials.key.as_str());

        let response: LanguageResponse = from_body(self.backend.post_json(&request).await?)?;
        let results = response.results;

        let Some(document) = results.documents.into_iter().next() else {
            let message = results.errors.into_iter().next().map_or_else(
                || "no document in response".to_string(),
                |e| format!("{}: {}", e.error.code, e.error.message),
            );
            return Err(ClientError::invalid_response(message));
        };

        let code = document.detected_language.iso6391_name;
        let detected_language = if code.is_empty() || code == SERVICE_UNKNOWN {
            UNKNOWN_LANGUAGE.to_string()
        } else {
            code
        };

        let issues = document
            .warnings
            .into_iter()
            .map(|w| Issue::new(w.code, w.message))
            .collect();

        Ok(GrammarResult::new(issues, detected_language))
    }
}
