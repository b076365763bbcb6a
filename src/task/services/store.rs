//! Task store service: CRUD over a snapshot store.
//!
//! Every operation re-reads the snapshot so external edits to the backing
//! file are reflected immediately. Mutating operations run the full
//! load-mutate-save cycle under an internal lock; interleaved read-modify-
//! write cycles from concurrent callers cannot lose updates.

use crate::task::domain::{Task, TaskDomainError, TaskId, TaskStatus, TaskTitle};
use crate::task::ports::{SnapshotStore, SnapshotStoreError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
    description: String,
}

impl AddTaskRequest {
    /// Creates a request with the required title and an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial update for a task: only supplied fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskPatch {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
}

impl UpdateTaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for task store operations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Domain validation failed; store state is unchanged.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No task with the given identifier exists.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The snapshot store failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotStoreError),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Single source of truth for task CRUD, backed by a snapshot store.
pub struct TaskStore<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    snapshot: Arc<S>,
    clock: Arc<C>,
    write_lock: Mutex<()>,
}

impl<S, C> TaskStore<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    /// Creates a task store over the given snapshot store and clock.
    #[must_use]
    pub const fn new(snapshot: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            snapshot,
            clock,
            write_lock: Mutex::const_new(()),
        }
    }

    /// Returns all tasks in stored order, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Snapshot`] when the snapshot cannot be
    /// loaded.
    pub async fn list(&self, filter: Option<TaskStatus>) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.snapshot.load().await?;
        Ok(match filter {
            Some(status) => tasks
                .into_iter()
                .filter(|task| task.status() == status)
                .collect(),
            None => tasks,
        })
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no such task exists, or
    /// [`TaskStoreError::Snapshot`] when the snapshot cannot be loaded.
    pub async fn get(&self, id: TaskId) -> TaskStoreResult<Task> {
        let tasks = self.snapshot.load().await?;
        tasks
            .into_iter()
            .find(|task| task.id() == id)
            .ok_or(TaskStoreError::NotFound(id))
    }

    /// Creates a new pending task and persists the grown collection.
    ///
    /// Validation runs before the snapshot is touched, so a rejected request
    /// leaves the stored collection unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when the title is empty, or
    /// [`TaskStoreError::Snapshot`] when persistence fails.
    pub async fn add(&self, request: AddTaskRequest) -> TaskStoreResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let task = Task::new(title, request.description, &*self.clock);

        let _guard = self.write_lock.lock().await;
        let mut tasks = self.snapshot.load().await?;
        tasks.push(task.clone());
        self.snapshot.save(&tasks).await?;
        Ok(task)
    }

    /// Applies a partial update to the task with the given identifier.
    ///
    /// Only fields present in the patch change; the rest keep their stored
    /// values. Supplied fields are validated before the snapshot is touched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when a supplied title is
    /// empty, [`TaskStoreError::NotFound`] when the identifier is unknown,
    /// or [`TaskStoreError::Snapshot`] when persistence fails.
    pub async fn update(&self, id: TaskId, patch: UpdateTaskPatch) -> TaskStoreResult<Task> {
        let new_title = patch.title.map(TaskTitle::new).transpose()?;

        let _guard = self.write_lock.lock().await;
        let mut tasks = self.snapshot.load().await?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskStoreError::NotFound(id))?;

        if let Some(title) = new_title {
            task.set_title(title);
        }
        if let Some(description) = patch.description {
            task.set_description(description);
        }
        if let Some(status) = patch.status {
            task.set_status(status);
        }
        let updated = task.clone();
        self.snapshot.save(&tasks).await?;
        Ok(updated)
    }

    /// Removes the task with the given identifier.
    ///
    /// Returns `true` when a task was removed. An unknown identifier is not
    /// an error: the result is `false` and the snapshot is not rewritten.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Snapshot`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskStoreResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.snapshot.load().await?;
        let before = tasks.len();
        tasks.retain(|task| task.id() != id);
        if tasks.len() == before {
            return Ok(false);
        }
        self.snapshot.save(&tasks).await?;
        Ok(true)
    }
}
