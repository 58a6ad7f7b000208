#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// The Default* aliases are used through the core ports, not their generic
// structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Clients
pub use client::{DefaultCompletionClient, DefaultContentSafetyClient, DefaultLanguageClient};

// Configuration
pub use config::{ClientConfig, CompletionTarget, ServiceCredentials};

// Errors
pub use error::{ClientError, ClientResult};

// API versions and defaults
pub use url::{
    AZURE_OPENAI_API_VERSION, CONTENT_SAFETY_API_VERSION, LANGUAGE_API_VERSION, OPENAI_BASE_URL,
};
