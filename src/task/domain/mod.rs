//! Domain model for task records.
//!
//! The task domain models the lifecycle of a to-do record: creation with a
//! fresh identifier and timestamp, field-level mutation, and completion
//! state, while keeping all persistence concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskIdError, ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use task::{Task, TaskStatus};
