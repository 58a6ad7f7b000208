//! Chat completion client for Azure OpenAI and OpenAI.

use promptline_core::CompletionRequest;

use super::{from_body, to_body};
use crate::config::{ClientConfig, CompletionTarget};
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpBackend, JsonPost, ReqwestBackend};
use crate::models::{ChatMessage, ChatRequest, ChatResponse};
use crate::url::{azure_chat_url, openai_chat_url};

const SERVICE: &str = "Completion";

/// Completion client using the reqwest backend.
pub type DefaultCompletionClient = CompletionClient<ReqwestBackend>;

pub struct CompletionClient<B: HttpBackend> {
    backend: B,
    target: Option<CompletionTarget>,
}

impl DefaultCompletionClient {
    pub fn new(target: Option<CompletionTarget>, config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
            target,
        })
    }
}

impl<B: HttpBackend> CompletionClient<B> {
    #[cfg(test)]
    pub(crate) const fn with_backend(target: Option<CompletionTarget>, backend: B) -> Self {
        Self { backend, target }
    }

    pub const fn target(&self) -> Option<&CompletionTarget> {
        self.target.as_ref()
    }

    /// Send the prompt as a single user message and return the first choice.
    pub async fn complete(&self, request: &CompletionRequest) -> ClientResult<String> {
        let target = self
            .target
            .as_ref()
            .ok_or(ClientError::NotConfigured { service: SERVICE })?;

        let messages = vec![ChatMessage {
            role: "user",
            content: &request.prompt,
        }];

        let post = match target {
            CompletionTarget::AzureOpenAi {
                credentials,
                deployment,
                api_version,
            } => JsonPost::new(
                azure_chat_url(&credentials.endpoint, deployment, api_version)?,
                to_body(&ChatRequest {
                    model: None,
                    messages,
                    max_tokens: request.max_tokens,
                    temperature: request.temperature,
                })?,
            )
            .header("api-key", credentials.key.as_str()),
            CompletionTarget::OpenAi {
                base_url,
                api_key,
                model,
            } => JsonPost::new(
                openai_chat_url(base_url)?,
                to_body(&ChatRequest {
                    model: Some(model.as_str()),
                    messages,
                    max_tokens: request.max_tokens,
                    temperature: request.temperature,
                })?,
            )
            .header("Authorization", format!("Bearer {api_key}")),
        };

        let response: ChatResponse = from_body(self.backend.post_json(&post).await?)?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ClientError::invalid_response("completion returned no content"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceCredentials;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            prompt: prompt.to_string(),
            max_tokens: 500,
            temperature: 0.3,
        }
    }

    fn chat_response(content: &str) -> CannedResponse {
        CannedResponse::Json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "finish_reason": "stop",
                "message": {"role": "assistant", "content": content}
            }]
        }))
    }

    #[tokio::test]
    async fn test_azure_target() {
        let backend = FakeBackend::new().with_response(
            "/openai/deployments/rewrite/chat/completions",
            chat_response("What is the weather?"),
        );
        let target = CompletionTarget::azure(
            ServiceCredentials::new("https://oai.openai.azure.com", "azure-key"),
            "rewrite",
        );
        let client = CompletionClient::with_backend(Some(target), backend);

        let text = client.complete(&request("fix: waht is teh weathr")).await.unwrap();
        assert_eq!(text, "What is the weather?");

        let sent = client.backend.requests();
        assert!(sent[0].headers.contains(&("api-key", "azure-key".to_string())));
        assert!(sent[0].body.get("model").is_none());
        assert_eq!(sent[0].body["max_tokens"], 500);
        assert_eq!(sent[0].body["messages"][0]["role"], "user");
        assert_eq!(sent[0].body["messages"][0]["content"], "fix: waht is teh weathr");
    }

    #[tokio::test]
    async fn test_openai_target() {
        let backend =
            FakeBackend::new().with_response("api.openai.com/v1/chat/completions", chat_response("hi"));
        let client =
            CompletionClient::with_backend(Some(CompletionTarget::openai("sk-test", "gpt-4")), backend);

        assert_eq!(client.complete(&request("hello")).await.unwrap(), "hi");

        let sent = client.backend.requests();
        assert_eq!(sent[0].body["model"], "gpt-4");
        assert!(
            sent[0]
                .headers
                .contains(&("Authorization", "Bearer sk-test".to_string()))
        );
    }

    #[tokio::test]
    async fn test_no_choices_is_invalid_response() {
        let backend = FakeBackend::new()
            .with_response("chat/completions", CannedResponse::Json(json!({"choices": []})));
        let client =
            CompletionClient::with_backend(Some(CompletionTarget::openai("k", "gpt-4")), backend);

        assert!(matches!(
            client.complete(&request("hello")).await,
            Err(ClientError::InvalidResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_target() {
        let client = CompletionClient::with_backend(None, FakeBackend::new());
        assert!(client.target().is_none());
        assert!(matches!(
            client.complete(&request("hello")).await,
            Err(ClientError::NotConfigured { .. })
        ));
    }
}
