//! Application configuration.
//!
//! Everything is read once at startup into an [`AppConfig`]. The pipelines and
//! clients receive plain values and never read the environment themselves.

use std::time::Duration;

use axum::http::HeaderValue;
use promptline_clients::{CompletionTarget, ServiceCredentials};
use promptline_core::{
    PipelineSettings, SafetyFailurePolicy, SettingsError, validate_settings,
};
use thiserror::Error;

use crate::bootstrap::{CorsConfig, ServerConfig};

pub const CONTENT_SAFETY_ENDPOINT: &str = "CONTENT_SAFETY_ENDPOINT";
pub const CONTENT_SAFETY_KEY: &str = "CONTENT_SAFETY_KEY";
pub const LANGUAGE_ENDPOINT: &str = "LANGUAGE_ENDPOINT";
pub const LANGUAGE_KEY: &str = "LANGUAGE_KEY";
pub const AZURE_OPENAI_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
pub const AZURE_OPENAI_KEY: &str = "AZURE_OPENAI_KEY";
pub const AZURE_OPENAI_REWRITE_DEPLOYMENT: &str = "AZURE_OPENAI_REWRITE_DEPLOYMENT";
pub const AZURE_OPENAI_RESPONSE_DEPLOYMENT: &str = "AZURE_OPENAI_RESPONSE_DEPLOYMENT";
pub const AZURE_OPENAI_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const SAFETY_POLICY: &str = "PROMPTLINE_SAFETY_POLICY";
pub const TIMEOUT_SECS: &str = "PROMPTLINE_TIMEOUT_SECS";
pub const HOST: &str = "PROMPTLINE_HOST";
pub const PORT: &str = "PROMPTLINE_PORT";
pub const ALLOWED_ORIGINS: &str = "PROMPTLINE_ALLOWED_ORIGINS";

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7071;

/// Errors raised while reading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Complete runtime configuration.
///
/// Collaborators without credentials are `None`. The matching pipeline step
/// then takes its fallback (or fails closed, for the safety check).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub content_safety: Option<ServiceCredentials>,
    pub language: Option<ServiceCredentials>,
    /// Completion target for the rewrite and suggestion steps.
    pub rewrite: Option<CompletionTarget>,
    /// Completion target for final responses.
    pub response: Option<CompletionTarget>,
    pub settings: PipelineSettings,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let content_safety =
            ServiceCredentials::from_parts(get(CONTENT_SAFETY_ENDPOINT), get(CONTENT_SAFETY_KEY));
        let language = ServiceCredentials::from_parts(get(LANGUAGE_ENDPOINT), get(LANGUAGE_KEY));

        let openai = get(OPENAI_API_KEY).map(|key| {
            let target = CompletionTarget::openai(
                key,
                get(OPENAI_MODEL).unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            );
            match get(OPENAI_BASE_URL) {
                Some(url) => target.with_base_url(url),
                None => target,
            }
        });
        let azure = ServiceCredentials::from_parts(get(AZURE_OPENAI_ENDPOINT), get(AZURE_OPENAI_KEY));
        let azure_api_version = get(AZURE_OPENAI_API_VERSION);

        // Azure OpenAI wins when both the credentials and the deployment are set
        let completion_target = |deployment_key: &str| match (&azure, get(deployment_key)) {
            (Some(credentials), Some(deployment)) => {
                let target = CompletionTarget::azure(credentials.clone(), deployment);
                Some(match &azure_api_version {
                    Some(version) => target.with_api_version(version.as_str()),
                    None => target,
                })
            }
            _ => openai.clone(),
        };
        let rewrite = completion_target(AZURE_OPENAI_REWRITE_DEPLOYMENT);
        let response = completion_target(AZURE_OPENAI_RESPONSE_DEPLOYMENT);

        let mut settings = PipelineSettings::default();
        if let Some(policy) = get(SAFETY_POLICY) {
            settings = settings.with_safety_policy(policy.parse::<SafetyFailurePolicy>()?);
        }
        if let Some(raw) = get(TIMEOUT_SECS) {
            let secs = parse_number::<u64>(TIMEOUT_SECS, &raw)?;
            settings = settings.with_collaborator_timeout(Duration::from_secs(secs));
        }
        validate_settings(&settings)?;

        let port = match get(PORT) {
            Some(raw) => parse_number::<u16>(PORT, &raw)?,
            None => DEFAULT_PORT,
        };
        let cors = match get(ALLOWED_ORIGINS) {
            Some(raw) => parse_origins(&raw)?,
            None => CorsConfig::AllowAll,
        };
        let server = ServerConfig {
            host: get(HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            cors,
        };

        Ok(Self {
            content_safety,
            language,
            rewrite,
            response,
            settings,
            server,
        })
    }
}

/// Comma-separated origins. A `*` entry, or a list with no entries, allows
/// every origin. An origin that is not a valid header value is an error.
fn parse_origins(raw: &str) -> Result<CorsConfig, ConfigError> {
    let mut origins = Vec::new();
    for origin in raw.split(',').map(str::trim).filter(|o| !o.is_empty()) {
        if origin == "*" {
            return Ok(CorsConfig::AllowAll);
        }
        let value = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
            key: ALLOWED_ORIGINS,
            value: origin.to_string(),
            reason: e.to_string(),
        })?;
        origins.push(value);
    }

    Ok(if origins.is_empty() {
        CorsConfig::AllowAll
    } else {
        CorsConfig::AllowOrigins(origins)
    })
}

fn parse_number<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
