//! In-memory snapshot store for tests and ephemeral collections.

use crate::task::domain::Task;
use crate::task::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory snapshot store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> SnapshotStoreResult<Vec<Task>> {
        let tasks = self
            .tasks
            .read()
            .map_err(|err| SnapshotStoreError::io(std::io::Error::other(err.to_string())))?;
        Ok(tasks.clone())
    }

    async fn save(&self, tasks: &[Task]) -> SnapshotStoreResult<()> {
        let mut stored = self
            .tasks
            .write()
            .map_err(|err| SnapshotStoreError::io(std::io::Error::other(err.to_string())))?;
        *stored = tasks.to_vec();
        Ok(())
    }
}
