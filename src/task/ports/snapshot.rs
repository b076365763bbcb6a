//! Snapshot store port for whole-collection task persistence.

use crate::task::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Whole-collection persistence contract.
///
/// The store always reads and writes the complete task collection; there is
/// no per-record access. Callers own the read-modify-write cycle and must
/// serialise it themselves when running concurrently.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the full task collection in stored order.
    ///
    /// A missing backing file yields an empty collection rather than an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Io`] when the backing store cannot be
    /// read, or [`SnapshotStoreError::Corrupt`] when the implementation is
    /// configured to reject unparseable content.
    async fn load(&self) -> SnapshotStoreResult<Vec<Task>>;

    /// Replaces the entire persisted snapshot with the given collection.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Io`] when the backing store cannot be
    /// written or [`SnapshotStoreError::Encode`] when the collection cannot
    /// be serialised.
    async fn save(&self, tasks: &[Task]) -> SnapshotStoreResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// The snapshot exists but cannot be parsed.
    #[error("snapshot is corrupt: {0}")]
    Corrupt(Arc<serde_json::Error>),

    /// The collection could not be serialised for writing.
    #[error("snapshot encoding failed: {0}")]
    Encode(Arc<serde_json::Error>),

    /// The backing store could not be read or written.
    #[error("snapshot I/O failed: {0}")]
    Io(Arc<std::io::Error>),
}

impl SnapshotStoreError {
    /// Wraps a parse error as snapshot corruption.
    #[must_use]
    pub fn corrupt(err: serde_json::Error) -> Self {
        Self::Corrupt(Arc::new(err))
    }

    /// Wraps a serialisation error.
    #[must_use]
    pub fn encode(err: serde_json::Error) -> Self {
        Self::Encode(Arc::new(err))
    }

    /// Wraps an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
