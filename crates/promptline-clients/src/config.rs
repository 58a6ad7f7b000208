//! Public configuration for the collaborator clients.
//!
//! Values are built once at startup by the composition root and handed to
//! the client constructors. Nothing here reads the environment.

use std::fmt;
use std::time::Duration;

use crate::url::{AZURE_OPENAI_API_VERSION, OPENAI_BASE_URL};

/// Shared HTTP settings for all clients.
///
/// # Example
///
/// ```
/// use promptline_clients::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new().with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Per-request timeout enforced by the HTTP client
    pub(crate) timeout: Duration,
    /// `promptline/<version>`
    pub(crate) user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            user_agent: concat!("promptline/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    ///
    /// Defaults to 20 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Endpoint and subscription key of an Azure AI service.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceCredentials {
    pub(crate) endpoint: String,
    pub(crate) key: String,
}

impl ServiceCredentials {
    pub fn new(endpoint: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            key: key.into(),
        }
    }

    /// Build credentials only when both parts are present and non-blank.
    #[must_use]
    pub fn from_parts(endpoint: Option<String>, key: Option<String>) -> Option<Self> {
        let endpoint = endpoint.filter(|e| !e.trim().is_empty())?;
        let key = key.filter(|k| !k.trim().is_empty())?;
        Some(Self::new(endpoint.trim(), key.trim()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// Keys never appear in logs
impl fmt::Debug for ServiceCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCredentials")
            .field("endpoint", &self.endpoint)
            .field("key", &"***")
            .finish()
    }
}

/// Which chat completion API a completion client talks to.
#[derive(Clone, PartialEq, Eq)]
pub enum CompletionTarget {
    /// An Azure OpenAI deployment.
    AzureOpenAi {
        credentials: ServiceCredentials,
        deployment: String,
        api_version: String,
    },
    /// The public OpenAI API.
    OpenAi {
        base_url: String,
        api_key: String,
        model: String,
    },
}

impl CompletionTarget {
    pub fn azure(credentials: ServiceCredentials, deployment: impl Into<String>) -> Self {
        Self::AzureOpenAi {
            credentials,
            deployment: deployment.into(),
            api_version: AZURE_OPENAI_API_VERSION.to_string(),
        }
    }

    pub fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::OpenAi {
            base_url: OPENAI_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Override the API version (Azure) or base URL (OpenAI).
    #[must_use]
    pub fn with_api_version(self, version: impl Into<String>) -> Self {
        match self {
            Self::AzureOpenAi {
                credentials,
                deployment,
                ..
            } => Self::AzureOpenAi {
                credentials,
                deployment,
                api_version: version.into(),
            },
            other @ Self::OpenAi { .. } => other,
        }
    }

    #[must_use]
    pub fn with_base_url(self, url: impl Into<String>) -> Self {
        match self {
            Self::OpenAi { api_key, model, .. } => Self::OpenAi {
                base_url: url.into(),
                api_key,
                model,
            },
            other @ Self::AzureOpenAi { .. } => other,
        }
    }

    /// Short label for logs, e.g. `azure-openai:gpt-4o-rewrite`.
    pub fn label(&self) -> String {
        match self {
            Self::AzureOpenAi { deployment, .. } => format!("azure-openai:{deployment}"),
            Self::OpenAi { model, .. } => format!("openai:{model}"),
        }
    }
}

impl fmt::Debug for CompletionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
