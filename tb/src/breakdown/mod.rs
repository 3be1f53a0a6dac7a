//! Task breakdown
//!
//! The only business logic in the crate: a `TaskRequest` goes in, one
//! schema-constrained model call is made, and a `BreakdownResult` list comes
//! out.
//!
//! ```text
//! Validating --empty--> Invalid
//!     |
//!     v
//! Invoking --> Shaping --> Done
//! ```

mod error;
mod handler;
mod request;
mod result;
pub mod schema;

pub use error::{BreakdownError, TASK_REQUIRED};
pub use handler::{BreakdownHandler, DEFAULT_MODEL};
pub use request::TaskRequest;
pub use result::{BreakdownResult, DEFAULT_SUBTASK_TITLE, ListItem, RESULT_TITLE, RESULT_TYPE, SubtaskItem};
