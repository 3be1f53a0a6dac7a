//! BreakdownHandler - turns one task into a list of subtasks
//!
//! Validates the task, makes exactly one schema-constrained model call, and
//! reshapes the returned JSON into the host's list payload.

use std::sync::Arc;

use tracing::{debug, info};

use super::schema::{SCHEMA_NAME, response_format};
use super::{BreakdownError, BreakdownResult, TaskRequest};
use crate::llm::{InputMessage, LlmClient, ResponseRequest};
use crate::prompts::PromptLoader;

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Handler for `break_down_task`
///
/// Holds the injected client handle; one handler serves any number of
/// sequential requests.
pub struct BreakdownHandler {
    llm: Arc<dyn LlmClient>,
    model: String,
    prompts: PromptLoader,
}

impl BreakdownHandler {
    /// Create a handler around an existing client
    pub fn new(llm: Arc<dyn LlmClient>, model: impl Into<String>) -> Result<Self, BreakdownError> {
        let model = model.into();
        debug!(%model, "BreakdownHandler::new: called");
        Ok(Self {
            llm,
            model,
            prompts: PromptLoader::new()?,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the two-message, schema-constrained request for a validated task
    pub fn build_request(&self, task: &str) -> Result<ResponseRequest, BreakdownError> {
        debug!(task_len = task.len(), "build_request: called");
        Ok(ResponseRequest {
            model: self.model.clone(),
            input: vec![
                InputMessage::system(self.prompts.system_prompt()?),
                InputMessage::user(self.prompts.user_prompt(task, SCHEMA_NAME)?),
            ],
            response_format: response_format(),
        })
    }

    /// Break a task down into subtasks
    ///
    /// Empty input fails with `Validation` before the client is touched. Any
    /// model-side failure is returned as `Provider` without retrying.
    pub async fn break_down_task(&self, request: &TaskRequest) -> Result<BreakdownResult, BreakdownError> {
        debug!("break_down_task: called");
        let task = request.validated_task()?;

        let model_request = self.build_request(task)?;
        info!(model = %self.model, task_len = task.len(), "Requesting task breakdown");
        let response = self.llm.respond(model_request).await?;

        let result = BreakdownResult::from_payload(response.first_text()?)?;
        info!(subtasks = result.items.len(), "Task breakdown complete");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;
    use crate::llm::client::mock::MockLlmClient;
    use crate::llm::{LlmError, ModelResponse};
    use serde_json::json;

    const TWO_SUBTASKS: &str = r#"{"subtasks": [
        {"title": "Subtask A", "guidance": "Do A first."},
        {"title": "Subtask B", "guidance": "Then handle B."}
    ]}"#;

    fn handler(mock: &Arc<MockLlmClient>) -> BreakdownHandler {
        BreakdownHandler::new(mock.clone(), DEFAULT_MODEL).unwrap()
    }

    #[tokio::test]
    async fn test_break_down_task_returns_list() {
        let mock = Arc::new(MockLlmClient::with_text(TWO_SUBTASKS, 1));
        let handler = handler(&mock);

        let request = TaskRequest::from(&json!({"inputs": {"task": "Organize an event"}}));
        let result = handler.break_down_task(&request).await.unwrap();

        assert_eq!(result.kind, "list");
        assert_eq!(result.title, "Suggested subtasks");
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].title, "Subtask A");
        assert_eq!(result.items[0].body, "Do A first.");
        assert_eq!(result.items[1].title, "Subtask B");
        assert_eq!(result.raw[1], json!({"title": "Subtask B", "guidance": "Then handle B."}));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_prompts_and_schema() {
        let mock = Arc::new(MockLlmClient::with_text(TWO_SUBTASKS, 1));
        let handler = handler(&mock);

        handler
            .break_down_task(&TaskRequest::new("  Organize an event \n"))
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        let sent = &requests[0];
        assert_eq!(sent.model, "gpt-4.1-mini");
        assert_eq!(sent.input.len(), 2);
        assert_eq!(sent.input[0].role, Role::System);
        assert!(sent.input[0].text().contains("expert project planner"));
        assert_eq!(sent.input[1].role, Role::User);
        assert_eq!(
            sent.input[1].text(),
            "Task: Organize an event\n\nRespond with JSON that matches the schema named task_breakdown."
        );

        let body = serde_json::to_value(sent).unwrap();
        assert_eq!(body["response_format"]["json_schema"]["name"], "task_breakdown");
    }

    #[tokio::test]
    async fn test_empty_task_fails_before_model_call() {
        let mock = Arc::new(MockLlmClient::with_text(TWO_SUBTASKS, 1));
        let handler = handler(&mock);

        for request in [json!({"inputs": {"task": "   "}}), json!({})] {
            let err = handler
                .break_down_task(&TaskRequest::from(&request))
                .await
                .unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let mock = Arc::new(MockLlmClient::new(vec![]));
        let handler = handler(&mock);

        let err = handler.break_down_task(&TaskRequest::new("Ship it")).await.unwrap_err();
        assert!(err.is_provider());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_response_is_provider_error() {
        let mock = Arc::new(MockLlmClient::new(vec![
            ModelResponse::default(),
            ModelResponse::from_text("not json"),
        ]));
        let handler = handler(&mock);

        let err = handler.break_down_task(&TaskRequest::new("x")).await.unwrap_err();
        assert!(matches!(err, BreakdownError::Provider(LlmError::InvalidResponse(_))));

        let err = handler.break_down_task(&TaskRequest::new("x")).await.unwrap_err();
        assert!(matches!(err, BreakdownError::Provider(LlmError::Json(_))));
    }

    #[tokio::test]
    async fn test_handler_is_reused_across_calls() {
        let mock = Arc::new(MockLlmClient::with_text(TWO_SUBTASKS, 3));
        let handler = handler(&mock);

        for task in ["one", "two", "three"] {
            handler.break_down_task(&TaskRequest::new(task)).await.unwrap();
        }
        assert_eq!(mock.call_count(), 3);
    }

    #[test]
    fn test_custom_model() {
        let mock = Arc::new(MockLlmClient::new(vec![]));
        let handler = BreakdownHandler::new(mock, "gpt-4o").unwrap();
        assert_eq!(handler.model(), "gpt-4o");
        assert_eq!(handler.build_request("t").unwrap().model, "gpt-4o");
    }
}
