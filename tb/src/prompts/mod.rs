//! Prompt templates for the breakdown call
//!
//! Templates are embedded in the binary and rendered with Handlebars.

mod embedded;
mod loader;

pub use loader::PromptLoader;
