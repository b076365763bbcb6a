//! Page handlers mapping browser requests onto task store operations.

use super::views::TaskViews;
use crate::task::domain::{TaskId, TaskStatus};
use crate::task::ports::{SnapshotStore, SnapshotStoreError};
use crate::task::services::{AddTaskRequest, TaskStore, TaskStoreError, UpdateTaskPatch};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Parsed form body for the create and update pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskForm {
    /// Task title; required, rejected when empty.
    pub title: String,
    /// Free-text description; absent form fields default to empty.
    #[serde(default)]
    pub description: String,
    /// Status value; only present on the edit form.
    #[serde(default)]
    pub status: Option<String>,
}

/// Outcome a router translates into an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Rendered HTML page (200).
    Page(String),
    /// Redirect target following a successful write (303).
    Redirect(String),
    /// The referenced task does not exist (404).
    NotFound(String),
    /// The request carried an invalid field (400).
    BadRequest(String),
}

/// Failures the embedding layer surfaces as a server error.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A view failed to render.
    #[error("view rendering failed: {0}")]
    Render(#[from] minijinja::Error),

    /// The snapshot store failed.
    #[error(transparent)]
    Storage(#[from] SnapshotStoreError),
}

/// Result type for page handlers.
pub type HandlerResult = Result<HandlerResponse, HandlerError>;

const INDEX_PATH: &str = "/";

/// Page handlers over a shared task store.
pub struct TaskPages<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    store: Arc<TaskStore<S, C>>,
    views: TaskViews,
}

impl<S, C> TaskPages<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    /// Creates the handler set over the given store.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Render`] when the embedded templates fail to
    /// parse.
    pub fn new(store: Arc<TaskStore<S, C>>) -> Result<Self, HandlerError> {
        Ok(Self {
            store,
            views: TaskViews::new()?,
        })
    }

    /// `GET /` — renders the task listing, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when storage or rendering fails.
    pub async fn index(&self, filter: Option<&str>) -> HandlerResult {
        let filter_status = match filter {
            Some(raw) => match TaskStatus::try_from(raw) {
                Ok(status) => Some(status),
                Err(err) => return Ok(HandlerResponse::BadRequest(err.to_string())),
            },
            None => None,
        };
        match self.store.list(filter_status).await {
            Ok(tasks) => Ok(HandlerResponse::Page(
                self.views.render_index(&tasks, filter_status)?,
            )),
            Err(err) => store_failure(err),
        }
    }

    /// `GET /new` — renders the create-task form.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Render`] when rendering fails.
    pub fn new_form(&self) -> HandlerResult {
        Ok(HandlerResponse::Page(self.views.render_new()?))
    }

    /// `POST /add` — creates a task and redirects to the listing.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when storage fails.
    pub async fn create(&self, form: TaskForm) -> HandlerResult {
        let request = AddTaskRequest::new(form.title).with_description(form.description);
        match self.store.add(request).await {
            Ok(_) => Ok(HandlerResponse::Redirect(INDEX_PATH.to_owned())),
            Err(err) => store_failure(err),
        }
    }

    /// `GET /edit/{id}` — renders the edit form for a task.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when storage or rendering fails.
    pub async fn edit_form(&self, id: &str) -> HandlerResult {
        let Some(task_id) = parse_id(id) else {
            return Ok(unknown_task(id));
        };
        match self.store.get(task_id).await {
            Ok(task) => Ok(HandlerResponse::Page(self.views.render_edit(&task)?)),
            Err(err) => store_failure(err),
        }
    }

    /// `POST /update/{id}` — applies the edit form and redirects.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when storage fails.
    pub async fn update(&self, id: &str, form: TaskForm) -> HandlerResult {
        let Some(task_id) = parse_id(id) else {
            return Ok(unknown_task(id));
        };
        let mut patch = UpdateTaskPatch::new()
            .with_title(form.title)
            .with_description(form.description);
        if let Some(raw_status) = form.status {
            match TaskStatus::try_from(raw_status.as_str()) {
                Ok(status) => patch = patch.with_status(status),
                Err(err) => return Ok(HandlerResponse::BadRequest(err.to_string())),
            }
        }
        match self.store.update(task_id, patch).await {
            Ok(_) => Ok(HandlerResponse::Redirect(INDEX_PATH.to_owned())),
            Err(err) => store_failure(err),
        }
    }

    /// `GET /delete/{id}` — removes a task (if present) and redirects.
    ///
    /// Deleting an unknown task is not an error; the listing redirect is
    /// returned either way.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when storage fails.
    pub async fn delete(&self, id: &str) -> HandlerResult {
        let Some(task_id) = parse_id(id) else {
            return Ok(HandlerResponse::Redirect(INDEX_PATH.to_owned()));
        };
        match self.store.delete(task_id).await {
            Ok(_) => Ok(HandlerResponse::Redirect(INDEX_PATH.to_owned())),
            Err(err) => store_failure(err),
        }
    }
}

/// A malformed identifier cannot name a stored task.
fn parse_id(raw: &str) -> Option<TaskId> {
    raw.parse().ok()
}

fn unknown_task(id: &str) -> HandlerResponse {
    HandlerResponse::NotFound(format!("task {id} not found"))
}

/// Maps a store error onto the response the user should see.
fn store_failure(err: TaskStoreError) -> HandlerResult {
    match err {
        TaskStoreError::Validation(validation) => {
            Ok(HandlerResponse::BadRequest(validation.to_string()))
        }
        TaskStoreError::NotFound(id) => Ok(unknown_task(&id.to_string())),
        TaskStoreError::Snapshot(storage) => Err(HandlerError::Storage(storage)),
    }
}
