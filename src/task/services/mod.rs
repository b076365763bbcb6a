//! Application services for task storage.

mod store;

pub use store::{AddTaskRequest, TaskStore, TaskStoreError, TaskStoreResult, UpdateTaskPatch};
