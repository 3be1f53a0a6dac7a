//! LLM client module
//!
//! Provides the client trait, Responses API wire types and the OpenAI
//! implementation.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod openai;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use openai::OpenAIClient;
pub use types::{
    ContentPart, InputMessage, JsonSchemaFormat, ModelResponse, OutputContent, OutputItem, ResponseFormat,
    ResponseRequest, Role,
};

use crate::config::LlmConfig;

/// Create an LLM client based on the provider specified in config
///
/// The returned handle is meant to be created once and shared by every
/// handler invocation.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "openai" => {
            debug!("create_client: creating OpenAI client");
            Ok(Arc::new(OpenAIClient::from_config(config)?))
        }
        other => {
            debug!(provider = %other, "create_client: unknown provider");
            Err(LlmError::UnsupportedProvider(other.to_string()))
        }
    }
}
