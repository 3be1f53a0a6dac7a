//! Task request envelope

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::BreakdownError;

/// The input of one breakdown call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskRequest {
    pub task: String,
}

/// Mapping sent by the host: `{"inputs": {"task": ...}}` or `{"task": ...}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HostRequest {
    inputs: HostInputs,
    task: Option<TaskField>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HostInputs {
    task: Option<TaskField>,
}

/// A `task` value; anything that is not a string reads as empty
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TaskField {
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl TaskField {
    fn into_text(self) -> Option<String> {
        match self {
            TaskField::Text(text) => Some(text),
            TaskField::Other(_) => None,
        }
    }
}

impl TaskRequest {
    pub fn new(task: impl Into<String>) -> Self {
        Self { task: task.into() }
    }

    /// The trimmed task, or a validation error when nothing is left
    pub fn validated_task(&self) -> Result<&str, BreakdownError> {
        let task = self.task.trim();
        if task.is_empty() {
            debug!("TaskRequest::validated_task: empty task");
            return Err(BreakdownError::task_required());
        }
        Ok(task)
    }
}

impl From<&Value> for TaskRequest {
    /// Read the task from a host mapping, preferring `inputs.task`
    ///
    /// A mapping that does not deserialize at all is treated as empty.
    fn from(value: &Value) -> Self {
        let host = HostRequest::deserialize(value).unwrap_or_else(|e| {
            debug!(error = %e, "TaskRequest::from: unreadable host mapping, treating as empty");
            HostRequest::default()
        });
        let task = host
            .inputs
            .task
            .and_then(TaskField::into_text)
            .or_else(|| host.task.and_then(TaskField::into_text))
            .unwrap_or_default();
        debug!(task_len = task.len(), "TaskRequest::from: parsed host mapping");
        Self::new(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_nested_inputs() {
        let req = TaskRequest::from(&json!({"inputs": {"task": "  Organize an event  "}}));
        assert_eq!(req.task, "  Organize an event  ");
        assert_eq!(req.validated_task().unwrap(), "Organize an event");
    }

    #[test]
    fn test_from_direct_task() {
        let req = TaskRequest::from(&json!({"task": "Write docs"}));
        assert_eq!(req.validated_task().unwrap(), "Write docs");
    }

    #[test]
    fn test_nested_task_wins_over_direct() {
        let req = TaskRequest::from(&json!({"task": "outer", "inputs": {"task": "inner"}}));
        assert_eq!(req.task, "inner");

        let req = TaskRequest::from(&json!({"task": "outer", "inputs": {"task": 3}}));
        assert_eq!(req.task, "outer");
    }

    #[test]
    fn test_missing_inputs_is_empty() {
        let req = TaskRequest::from(&json!({}));
        assert_eq!(req, TaskRequest::default());
        assert!(req.validated_task().unwrap_err().is_validation());

        let req = TaskRequest::from(&json!({"inputs": {}}));
        assert!(req.validated_task().unwrap_err().is_validation());
    }

    #[test]
    fn test_extra_host_fields_are_ignored() {
        let req = TaskRequest::from(&json!({"inputs": {"task": "Plan", "locale": "en"}, "session": 12}));
        assert_eq!(req.task, "Plan");
    }

    #[test]
    fn test_non_string_task_is_empty() {
        for value in [
            json!({"inputs": {"task": 42}}),
            json!({"inputs": {"task": null}}),
            json!({"inputs": {"task": ["a", "b"]}}),
            json!({"inputs": "task"}),
            json!(null),
        ] {
            let req = TaskRequest::from(&value);
            assert!(req.validated_task().unwrap_err().is_validation(), "{}", value);
        }
    }

    #[test]
    fn test_typed_request_deserializes_with_default() {
        let req: TaskRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req, TaskRequest::default());

        let req: TaskRequest = serde_json::from_value(json!({"task": "Ship"})).unwrap();
        assert_eq!(req.validated_task().unwrap(), "Ship");
    }

    #[test]
    fn test_whitespace_only_is_invalid() {
        let req = TaskRequest::new(" \t\n ");
        assert!(req.validated_task().unwrap_err().is_validation());
    }
}
