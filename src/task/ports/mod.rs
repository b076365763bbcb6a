//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the task store.

pub mod snapshot;

pub use snapshot::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
