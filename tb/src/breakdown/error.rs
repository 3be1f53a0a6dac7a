//! Breakdown error types

use thiserror::Error;

use crate::llm::LlmError;

/// Message returned when the task is empty after trimming
pub const TASK_REQUIRED: &str = "task description required";

/// Errors returned by the breakdown handler
///
/// `Validation` is raised before any network activity; the host re-displays the
/// form. `Provider` covers everything that went wrong during or after the model
/// call and is never retried here. `Prompt` is an internal fault: the embedded
/// templates failed to register or render, so the request was never sent and
/// the user's input was not at fault. It is neither validation nor provider.
#[derive(Debug, Error)]
pub enum BreakdownError {
    #[error("{0}")]
    Validation(String),

    #[error("provider error: {0}")]
    Provider(#[from] LlmError),

    #[error("prompt rendering failed: {0}")]
    Prompt(String),
}

impl BreakdownError {
    pub fn task_required() -> Self {
        BreakdownError::Validation(TASK_REQUIRED.to_string())
    }

    /// Check if this is a local input validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, BreakdownError::Validation(_))
    }

    /// Check if this failure came from the model provider
    pub fn is_provider(&self) -> bool {
        matches!(self, BreakdownError::Provider(_))
    }
}

impl From<handlebars::RenderError> for BreakdownError {
    fn from(err: handlebars::RenderError) -> Self {
        BreakdownError::Prompt(err.to_string())
    }
}

impl From<handlebars::TemplateError> for BreakdownError {
    fn from(err: handlebars::TemplateError) -> Self {
        BreakdownError::Prompt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_required() {
        let err = BreakdownError::task_required();
        assert!(err.is_validation());
        assert!(!err.is_provider());
        assert_eq!(err.to_string(), "task description required");
    }

    #[test]
    fn test_provider_from_llm_error() {
        let err: BreakdownError = LlmError::InvalidResponse("empty".to_string()).into();
        assert!(err.is_provider());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "provider error: Invalid response: empty");
    }

    #[test]
    fn test_template_failure_is_prompt_error() {
        let template_err = handlebars::Handlebars::new()
            .register_template_string("broken", "{{#if}}")
            .unwrap_err();
        let err: BreakdownError = template_err.into();
        assert!(matches!(err, BreakdownError::Prompt(_)));
        assert!(!err.is_validation());
        assert!(!err.is_provider());
        assert!(err.to_string().starts_with("prompt rendering failed: "));
    }
}
