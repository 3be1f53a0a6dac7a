//! LlmClient trait definition

use async_trait::async_trait;

use super::{LlmError, ModelResponse, ResponseRequest};

/// Stateless LLM client - each call is independent
///
/// Implementations hold only configuration and a transport, so one instance
/// can be shared behind an `Arc` and reused for any number of sequential calls.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single request and wait for the full response
    async fn respond(&self, request: ResponseRequest) -> Result<ModelResponse, LlmError>;
}
