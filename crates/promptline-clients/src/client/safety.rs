//! Azure AI Content Safety client.

use std::collections::BTreeMap;

use promptline_core::SafetyVerdict;

use super::{from_body, to_body};
use crate::config::{ClientConfig, ServiceCredentials};
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpBackend, JsonPost, ReqwestBackend};
use crate::models::{AnalyzeTextRequest, AnalyzeTextResponse};
use crate::url::content_safety_url;

const SERVICE: &str = "Content Safety";

/// Content Safety client using the reqwest backend.
pub type DefaultContentSafetyClient = ContentSafetyClient<ReqwestBackend>;

pub struct ContentSafetyClient<B: HttpBackend> {
    backend: B,
    credentials: Option<ServiceCredentials>,
}

impl DefaultContentSafetyClient {
    /// Create a client. Without credentials every call fails with
    /// `NotConfigured`.
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

impl<B: HttpBackend> ContentSafetyClient<B> {
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

    /// Analyze text and build a verdict from the category severities.
    pub async fn analyze(&self, text: &str) -> ClientResult<SafetyVerdict> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ClientError::NotConfigured { service: SERVICE })?;

        let request = JsonPost::new(
            content_safety_url(&credentials.endpoint)?,
            to_body(&AnalyzeTextRequest { text })?,
        )
        .header("Ocp-Apim-Subscription-Key", credentials.key.as_str());

        let response: AnalyzeTextResponse = from_body(self.backend.post_json(&request).await?)?;

        let severities: BTreeMap<String, i32> = response
            .categories_analysis
            .into_iter()
            .map(|analysis| (analysis.category, analysis.severity.unwrap_or(0)))
            .collect();

        Ok(SafetyVerdict::from_severities(severities))
    }
}
