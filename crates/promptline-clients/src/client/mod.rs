//! Collaborator clients.
//!
//! Each client is generic over an HTTP backend so tests can use a fake.
//! Use the `Default*` aliases in production code.

mod completion;
mod language;
mod safety;

pub use completion::{CompletionClient, DefaultCompletionClient};
pub use language::{DefaultLanguageClient, LanguageClient};
pub use safety::{ContentSafetyClient, DefaultContentSafetyClient};

use serde::Serialize;
use serde_json::Value;

use crate::error::ClientResult;

/// Serialize a wire request body.
pub(crate) fn to_body<T: Serialize>(body: &T) -> ClientResult<Value> {
    Ok(serde_json::to_value(body)?)
}

/// Deserialize a wire response body.
pub(crate) fn from_body<T: serde::de::DeserializeOwned>(body: Value) -> ClientResult<T> {
    Ok(serde_json::from_value(body)?)
}
