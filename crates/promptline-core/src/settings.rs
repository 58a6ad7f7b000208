//! Pipeline settings and validation.
//!
//! These are pure values with no infrastructure dependencies. Adapters build
//! them once at startup and hand them to the services.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default per-collaborator-call timeout.
pub const DEFAULT_COLLABORATOR_TIMEOUT: Duration = Duration::from_secs(20);

/// Bounds accepted for the per-call timeout, in seconds.
pub const TIMEOUT_RANGE_SECS: (u64, u64) = (1, 300);

/// What to do when the safety collaborator itself fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SafetyFailurePolicy {
    /// Treat the prompt as flagged.
    #[default]
    FailClosed,
    /// Let the prompt through unchecked.
    FailOpen,
}

impl SafetyFailurePolicy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FailClosed => "fail-closed",
            Self::FailOpen => "fail-open",
        }
    }
}

impl fmt::Display for SafetyFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SafetyFailurePolicy {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail-closed" | "closed" => Ok(Self::FailClosed),
            "fail-open" | "open" => Ok(Self::FailOpen),
            other => Err(SettingsError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Sampling parameters for one completion step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl GenerationParams {
    #[must_use]
    pub const fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

/// Settings shared by the pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSettings {
    pub safety_policy: SafetyFailurePolicy,
    pub collaborator_timeout: Duration,
    pub rewrite: GenerationParams,
    pub suggestions: GenerationParams,
    pub response: GenerationParams,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            safety_policy: SafetyFailurePolicy::FailClosed,
            collaborator_timeout: DEFAULT_COLLABORATOR_TIMEOUT,
            rewrite: GenerationParams::new(500, 0.3),
            suggestions: GenerationParams::new(500, 0.7),
            response: GenerationParams::new(800, 0.5),
        }
    }
}

impl PipelineSettings {
    #[must_use]
    pub const fn with_safety_policy(mut self, policy: SafetyFailurePolicy) -> Self {
        self.safety_policy = policy;
        self
    }

    #[must_use]
    pub const fn with_collaborator_timeout(mut self, timeout: Duration) -> Self {
        self.collaborator_timeout = timeout;
        self
    }
}

/// Errors for invalid pipeline settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("Unknown safety failure policy '{0}' (expected fail-closed or fail-open)")]
    UnknownPolicy(String),

    #[error("Collaborator timeout must be between {min} and {max} seconds, got {value}")]
    InvalidTimeout { value: u64, min: u64, max: u64 },

    #[error("Temperature for {step} must be between 0.0 and 2.0, got {value}")]
    InvalidTemperature { step: &'static str, value: f32 },

    #[error("Max tokens for {step} must be greater than zero")]
    InvalidMaxTokens { step: &'static str },
}

/// Validate pipeline settings.
pub fn validate_settings(settings: &PipelineSettings) -> Result<(), SettingsError> {
    let (min, max) = TIMEOUT_RANGE_SECS;
    let secs = settings.collaborator_timeout.as_secs();
    if !(min..=max).contains(&secs) {
        return Err(SettingsError::InvalidTimeout {
            value: secs,
            min,
            max,
        });
    }

    for (step, params) in [
        ("rewrite", &settings.rewrite),
        ("suggestions", &settings.suggestions),
        ("response", &settings.response),
    ] {
        if !(0.0..=2.0).contains(&params.temperature) {
            return Err(SettingsError::InvalidTemperature {
                step,
                value: params.temperature,
            });
        }
        if params.max_tokens == 0 {
            return Err(SettingsError::InvalidMaxTokens { step });
        }
    }

    Ok(())
}
