//! Request/response types for the Responses API
//!
//! The request carries a list of role-tagged input messages and a
//! `response_format` asking the provider for schema-validated JSON. The
//! response exposes `output[*].content[*].text`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::LlmError;

/// One model call - everything the provider needs
#[derive(Debug, Clone, Serialize)]
pub struct ResponseRequest {
    /// Model identifier (from config)
    pub model: String,

    /// Ordered input messages (system instruction first)
    pub input: Vec<InputMessage>,

    /// Structured output constraint
    pub response_format: ResponseFormat,
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// An input message made of content parts
#[derive(Debug, Clone, Serialize)]
pub struct InputMessage {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

impl InputMessage {
    /// Create a system message with a single text part
    pub fn system(text: impl Into<String>) -> Self {
        debug!("InputMessage::system: called");
        Self {
            role: Role::System,
            content: vec![ContentPart::text(text)],
        }
    }

    /// Create a user message with a single text part
    pub fn user(text: impl Into<String>) -> Self {
        debug!("InputMessage::user: called");
        Self {
            role: Role::User,
            content: vec![ContentPart::text(text)],
        }
    }

    /// Concatenated text of every part
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|part| match part {
                ContentPart::Text { text } => text.as_str(),
            })
            .collect()
    }
}

/// A content part in an input message
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }
}

/// Output constraint sent with the request
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ResponseFormat {
    #[serde(rename = "json_schema")]
    JsonSchema { json_schema: JsonSchemaFormat },
}

/// A named JSON schema the provider validates its output against
#[derive(Debug, Clone, Serialize)]
pub struct JsonSchemaFormat {
    pub name: String,
    pub schema: serde_json::Value,
}

/// Response from the provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelResponse {
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

/// One output item (a message produced by the model)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub content: Vec<OutputContent>,
}

/// A content block inside an output item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputContent {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ModelResponse {
    /// Build a response holding a single text block
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            output: vec![OutputItem {
                content: vec![OutputContent {
                    kind: Some("output_text".to_string()),
                    text: Some(text.into()),
                }],
            }],
        }
    }

    /// Text of the first content block of the first output item
    pub fn first_text(&self) -> Result<&str, LlmError> {
        debug!(output_count = %self.output.len(), "ModelResponse::first_text: called");
        let item = self
            .output
            .first()
            .ok_or_else(|| LlmError::InvalidResponse("response has no output items".to_string()))?;
        let block = item
            .content
            .first()
            .ok_or_else(|| LlmError::InvalidResponse("first output item has no content".to_string()))?;
        block
            .text
            .as_deref()
            .ok_or_else(|| LlmError::InvalidResponse("first content block has no text".to_string()))
    }
}
