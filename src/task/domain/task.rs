//! Task aggregate root and its completion status.

use super::{ParseTaskStatusError, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but not completed.
    Pending,
    /// Task has been completed.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task aggregate root.
///
/// Serialises to the snapshot record shape: `id`, `title`, `description`,
/// `status`, `created_at`, all string-valued, with no extra wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task with a fresh identifier.
    ///
    /// The creation timestamp is taken from the injected clock and never
    /// changes afterwards.
    #[must_use]
    pub fn new(title: TaskTitle, description: String, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title,
            description,
            status: TaskStatus::Pending,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the free-text description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the task title.
    pub fn set_title(&mut self, title: TaskTitle) {
        self.title = title;
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Replaces the completion status.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
