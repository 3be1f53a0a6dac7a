//! App manifest and name-based dispatch
//!
//! The hosting shell knows views and handlers by name only. `App` maps those
//! names to the form descriptor and the breakdown handler, and exchanges plain
//! JSON with the host.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::breakdown::{BreakdownError, BreakdownHandler, TaskRequest};
use crate::form::{BREAK_DOWN_HANDLER, FORM_VIEW, FormDescriptor, task_breakdown_form};

pub const APP_NAME: &str = "Task Breakdown Assistant";
pub const APP_DESCRIPTION: &str = "Collect a single task description and return a set of subtasks with guidance.";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Registered view names
pub const VIEWS: &[&str] = &[FORM_VIEW];

/// Registered handler names
pub const HANDLERS: &[&str] = &[BREAK_DOWN_HANDLER];

/// Errors surfaced to the host by name-based dispatch
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown handler: '{0}'")]
    UnknownHandler(String),

    #[error(transparent)]
    Breakdown(#[from] BreakdownError),

    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Check if the host should re-display the form with an error message
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Breakdown(err) if err.is_validation())
    }
}

/// The application as seen by the hosting shell
pub struct App {
    handler: BreakdownHandler,
}

impl App {
    pub fn new(handler: BreakdownHandler) -> Self {
        debug!(model = %handler.model(), "App::new: called");
        Self { handler }
    }

    pub fn name(&self) -> &'static str {
        APP_NAME
    }

    pub fn description(&self) -> &'static str {
        APP_DESCRIPTION
    }

    pub fn version(&self) -> &'static str {
        APP_VERSION
    }

    pub fn views(&self) -> &'static [&'static str] {
        VIEWS
    }

    pub fn handlers(&self) -> &'static [&'static str] {
        HANDLERS
    }

    /// Look up a view by name
    pub fn view(&self, name: &str) -> Option<FormDescriptor> {
        debug!(%name, "App::view: called");
        match name {
            FORM_VIEW => Some(task_breakdown_form()),
            _ => {
                debug!(%name, "App::view: unknown view");
                None
            }
        }
    }

    /// Dispatch a host request to a handler by name
    pub async fn handle(&self, name: &str, request: &Value) -> Result<Value, AppError> {
        debug!(%name, "App::handle: called");
        match name {
            BREAK_DOWN_HANDLER => {
                let result = self.handler.break_down_task(&TaskRequest::from(request)).await?;
                Ok(serde_json::to_value(result)?)
            }
            _ => {
                debug!(%name, "App::handle: unknown handler");
                Err(AppError::UnknownHandler(name.to_string()))
            }
        }
    }
}
