//! Form descriptor collecting the task description

use serde::{Deserialize, Serialize};

/// Name the host uses to look up this view
pub const FORM_VIEW: &str = "task_breakdown_form";

/// Handler invoked when the form is submitted
pub const BREAK_DOWN_HANDLER: &str = "break_down_task";

/// UI contract for a single-submit form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub fields: Vec<FormField>,
    pub submit_button_label: String,
    pub handler: String,
}

/// One input field of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub required: bool,
    pub placeholder: String,
}

/// The task breakdown form: one required `task` string
pub fn task_breakdown_form() -> FormDescriptor {
    FormDescriptor {
        kind: "form".to_string(),
        title: "Break down a task".to_string(),
        description: "Provide a task and the assistant will suggest subtasks with helpful guidance.".to_string(),
        fields: vec![FormField {
            name: "task".to_string(),
            title: "Task description".to_string(),
            kind: "string".to_string(),
            required: true,
            placeholder: "Plan a team offsite".to_string(),
        }],
        submit_button_label: "Break down task".to_string(),
        handler: BREAK_DOWN_HANDLER.to_string(),
    }
}
