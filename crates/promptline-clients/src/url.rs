//! URL construction helpers for the collaborator APIs.

use url::Url;

use crate::error::{ClientError, ClientResult};

pub const CONTENT_SAFETY_API_VERSION: &str = "2023-10-01";
pub const LANGUAGE_API_VERSION: &str = "2023-04-01";
pub const AZURE_OPENAI_API_VERSION: &str = "2024-02-01";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Append path segments (and an optional `api-version`) to a base endpoint.
fn build(endpoint: &str, segments: &[&str], api_version: Option<&str>) -> ClientResult<Url> {
    let invalid = |reason: String| ClientError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let mut url = Url::parse(endpoint.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    url.path_segments_mut()
        .map_err(|()| invalid("endpoint cannot be a base URL".to_string()))?
        .pop_if_empty()
        .extend(segments);

    if let Some(version) = api_version {
        url.query_pairs_mut().append_pair("api-version", version);
    }
    Ok(url)
}

/// `{endpoint}/contentsafety/text:analyze?api-version=...`
pub fn content_safety_url(endpoint: &str) -> ClientResult<Url> {
    build(
        endpoint,
        &["contentsafety", "text:analyze"],
        Some(CONTENT_SAFETY_API_VERSION),
    )
}

/// `{endpoint}/language/:analyze-text?api-version=...`
pub fn language_url(endpoint: &str) -> ClientResult<Url> {
    build(
        endpoint,
        &["language", ":analyze-text"],
        Some(LANGUAGE_API_VERSION),
    )
}

/// `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version=...`
pub fn azure_chat_url(endpoint: &str, deployment: &str, api_version: &str) -> ClientResult<Url> {
    build(
        endpoint,
        &["openai", "deployments", deployment, "chat", "completions"],
        Some(api_version),
    )
}

/// `{base_url}/chat/completions`
pub fn openai_chat_url(base_url: &str) -> ClientResult<Url> {
    build(base_url, &["chat", "completions"], None)
}
