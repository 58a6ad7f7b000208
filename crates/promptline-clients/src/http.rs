//! HTTP backend abstraction for the collaborator APIs.
//!
//! Clients are generic over an [`HttpBackend`] so tests can swap in a fake.
//! The production backend sends exactly one request per call; failed calls
//! are never retried here.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Longest error body kept in an error message.
const MAX_ERROR_BODY: usize = 300;

/// A JSON POST request.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPost {
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

impl JsonPost {
    pub const fn new(url: Url, body: Value) -> Self {
        Self {
            url,
            headers: Vec::new(),
            body,
        }
    }

    #[must_use]
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }
}

/// Trait for HTTP backends that can POST JSON and return JSON.
///
/// This is an implementation detail - external code should use the
/// collaborator ports from `promptline-core`.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn post_json(&self, request: &JsonPost) -> ClientResult<Value>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestBackend {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else {
            ClientError::Network(err)
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json(&self, request: &JsonPost) -> ClientResult<Value> {
        debug!(url = %redacted(&request.url), "POST");

        let mut builder = self.client.post(request.url.as_str()).json(&request.body);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes);
            return Err(ClientError::ApiRequestFailed {
                status: status.as_u16(),
                message: truncate(body.trim(), MAX_ERROR_BODY),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// URL without its query string, for logs.
fn redacted(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Canned response for the fake backend.
    #[derive(Debug, Clone)]
    pub enum CannedResponse {
        Json(Value),
        Status(u16, String),
    }

    /// A fake HTTP backend that returns canned responses and records requests.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: Vec<(String, CannedResponse)>,
        requests: Mutex<Vec<JsonPost>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a canned response for URLs containing `url_contains`.
        pub fn with_response(mut self, url_contains: &str, response: CannedResponse) -> Self {
            self.responses.push((url_contains.to_string(), response));
            self
        }

        /// Every request received so far.
        pub fn requests(&self) -> Vec<JsonPost> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn post_json(&self, request: &JsonPost) -> ClientResult<Value> {
            self.requests.lock().unwrap().push(request.clone());

            let canned = self
                .responses
                .iter()
                .find(|(pattern, _)| request.url.as_str().contains(pattern.as_str()))
                .map(|(_, response)| response.clone());

            match canned {
                Some(CannedResponse::Json(json)) => Ok(json),
                Some(CannedResponse::Status(status, message)) => {
                    Err(ClientError::ApiRequestFailed { status, message })
                }
                None => Err(ClientError::ApiRequestFailed {
                    status: 404,
                    message: request.url.to_string(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("ñññññ", 2), "ññ...");
    }

    #[test]
    fn test_redacted_drops_query() {
        let url = Url::parse("https://x.example/a/b?api-version=1&key=secret").unwrap();
        assert_eq!(redacted(&url), "https://x.example/a/b");
    }

    #[test]
    fn test_json_post_headers() {
        let url = Url::parse("https://x.example").unwrap();
        let post = JsonPost::new(url, json!({})).header("api-key", "k");
        assert_eq!(post.headers, vec![("api-key", "k".to_string())]);
    }

    #[test]
    fn test_reqwest_backend_creation() {
        let backend = ReqwestBackend::new(&ClientConfig::new()).unwrap();
        assert_eq!(backend.timeout, Duration::from_secs(20));
    }

    #[tokio::test]
    async fn test_fake_backend_returns_canned_response() {
        let backend =
            FakeBackend::new().with_response("analyze", CannedResponse::Json(json!({"ok": true})));

        let url = Url::parse("https://x.example/text:analyze").unwrap();
        let result = backend
            .post_json(&JsonPost::new(url, json!({"text": "hi"})))
            .await
            .unwrap();

        assert_eq!(result["ok"], true);
        assert_eq!(backend.requests().len(), 1);
        assert_eq!(backend.requests()[0].body["text"], "hi");
    }

    #[tokio::test]
    async fn test_fake_backend_returns_404_for_unknown_url() {
        let backend = FakeBackend::new();
        let url = Url::parse("https://x.example/unknown").unwrap();

        let result = backend.post_json(&JsonPost::new(url, json!({}))).await;
        assert!(matches!(
            result,
            Err(ClientError::ApiRequestFailed { status: 404, .. })
        ));
    }
}
