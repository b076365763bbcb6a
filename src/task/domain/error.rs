//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The status value is outside the {pending, done} enumeration.
    #[error("unknown task status: {0}")]
    InvalidStatus(String),
}

/// Error returned while parsing status values from user input or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

impl From<ParseTaskStatusError> for TaskDomainError {
    fn from(err: ParseTaskStatusError) -> Self {
        Self::InvalidStatus(err.0)
    }
}

/// Error returned while parsing task identifiers from path segments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed task identifier: {0}")]
pub struct ParseTaskIdError(pub String);
