//! OpenAI API client implementation
//!
//! Implements the LlmClient trait for OpenAI's Responses API. Each call is a
//! single POST; failures are reported to the caller as-is and never retried.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::{LlmClient, LlmError, ModelResponse, ResponseRequest};
use crate::config::LlmConfig;

/// Fallback wait reported when a 429 carries no usable retry-after header
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// OpenAI API client
pub struct OpenAIClient {
    api_key: String,
    base_url: String,
    http: Client,
    timeout: Duration,
}

impl OpenAIClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in the config.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(base_url = %config.base_url, timeout_ms = %config.timeout_ms, "from_config: called");
        let api_key = config.api_key()?;
        Self::new(api_key, &config.base_url, Duration::from_millis(config.timeout_ms))
    }

    /// Create a client with an explicit key and endpoint
    pub fn new(api_key: impl Into<String>, base_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Network)?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            timeout,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/responses", self.base_url)
    }

    /// Build the request body for the OpenAI API
    fn build_request_body(&self, request: &ResponseRequest) -> Result<serde_json::Value, LlmError> {
        debug!(model = %request.model, input_count = %request.input.len(), "build_request_body: called");
        Ok(serde_json::to_value(request)?)
    }
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn respond(&self, request: ResponseRequest) -> Result<ModelResponse, LlmError> {
        debug!(model = %request.model, "respond: called");
        let body = self.build_request_body(&request)?;

        let response = self
            .http
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    debug!("respond: request timed out");
                    LlmError::Timeout(self.timeout)
                } else {
                    debug!(error = %e, "respond: network error");
                    LlmError::Network(e)
                }
            })?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            warn!(retry_after, "respond: rate limited (429)");

            return Err(LlmError::RateLimited {
                retry_after: Duration::from_secs(retry_after),
            });
        }

        if !response.status().is_success() {
            debug!(%status, "respond: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError { status, message: text });
        }

        debug!("respond: success");
        let text = response.text().await?;
        let api_response: ModelResponse = serde_json::from_str(&text)?;
        Ok(api_response)
    }
}
