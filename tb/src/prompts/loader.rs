//! Prompt Loader
//!
//! Registers the embedded templates once and renders them per request.

use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;
use tracing::debug;

use super::embedded;

const SYSTEM_TEMPLATE: &str = "system";
const USER_TEMPLATE: &str = "user";

/// Values substituted into the user template
#[derive(Debug, Serialize)]
struct UserContext<'a> {
    task: &'a str,
    schema_name: &'a str,
}

/// Renders the breakdown prompts
pub struct PromptLoader {
    hbs: Handlebars<'static>,
}

impl PromptLoader {
    /// Create a loader with the embedded templates registered
    pub fn new() -> Result<Self, TemplateError> {
        debug!("PromptLoader::new: called");
        let mut hbs = Handlebars::new();
        // Task text goes to the model verbatim, not into HTML
        hbs.register_escape_fn(handlebars::no_escape);
        hbs.register_template_string(SYSTEM_TEMPLATE, embedded::SYSTEM)?;
        hbs.register_template_string(USER_TEMPLATE, embedded::USER)?;
        Ok(Self { hbs })
    }

    /// Render the system instruction
    pub fn system_prompt(&self) -> Result<String, RenderError> {
        debug!("PromptLoader::system_prompt: called");
        self.hbs.render(SYSTEM_TEMPLATE, &serde_json::json!({}))
    }

    /// Render the user message embedding the literal task text
    pub fn user_prompt(&self, task: &str, schema_name: &str) -> Result<String, RenderError> {
        debug!(task_len = task.len(), %schema_name, "PromptLoader::user_prompt: called");
        self.hbs.render(USER_TEMPLATE, &UserContext { task, schema_name })
    }
}
