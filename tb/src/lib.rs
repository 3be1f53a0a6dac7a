//! TaskBreakdown - single-form task decomposition
//!
//! Collects one free-text task, asks a hosted model for a schema-constrained
//! breakdown, and returns a titled list of subtask/guidance pairs.
//!
//! # Modules
//!
//! - [`form`] - the form descriptor the host renders
//! - [`breakdown`] - validation, the model call and result shaping
//! - [`app`] - app manifest and name-based dispatch for the host
//! - [`llm`] - LLM client trait and OpenAI implementation
//! - [`prompts`] - embedded prompt templates
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod app;
pub mod breakdown;
pub mod cli;
pub mod config;
pub mod form;
pub mod llm;
pub mod prompts;

// Re-export commonly used types
pub use app::{App, AppError};
pub use breakdown::{BreakdownError, BreakdownHandler, BreakdownResult, ListItem, SubtaskItem, TaskRequest};
pub use config::{Config, LlmConfig};
pub use form::{FormDescriptor, FormField, task_breakdown_form};
pub use llm::{LlmClient, LlmError, ModelResponse, OpenAIClient, ResponseRequest, create_client};
