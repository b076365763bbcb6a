//! JSON file snapshot store.
//!
//! Persists the task collection as a bare JSON array of records in a single
//! file. Reads go through a capability-scoped directory handle resolved once
//! at construction; writes land in a temporary sibling first and are renamed
//! over the target so readers never observe a truncated snapshot.

use crate::task::domain::Task;
use crate::task::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// Recovery policy for a snapshot file that exists but cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptFilePolicy {
    /// Treat the corrupt file as an empty collection.
    ///
    /// The next successful save overwrites the corrupt content, so this
    /// policy silently loses whatever the file held.
    #[default]
    TreatAsEmpty,
    /// Refuse to load, surfacing [`SnapshotStoreError::Corrupt`].
    FailFast,
}

/// Snapshot store backed by a JSON array file.
///
/// Files are small enough that I/O stays on the calling task.
#[derive(Debug)]
pub struct JsonFileSnapshotStore {
    dir: Dir,
    file_name: String,
    temp_name: String,
    policy: CorruptFilePolicy,
}

impl JsonFileSnapshotStore {
    /// Opens a store for the given snapshot file path.
    ///
    /// The parent directory must already exist; the file itself need not.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Io`] when the path has no file name or
    /// the parent directory cannot be opened.
    pub fn open(
        path: impl AsRef<Utf8Path>,
        policy: CorruptFilePolicy,
    ) -> SnapshotStoreResult<Self> {
        let path = path.as_ref();
        let file_name = path.file_name().ok_or_else(|| {
            SnapshotStoreError::io(std::io::Error::other(
                "snapshot path must include a file name",
            ))
        })?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(SnapshotStoreError::io)?;
        Ok(Self {
            dir,
            file_name: file_name.to_owned(),
            temp_name: format!(".{file_name}.tmp"),
            policy,
        })
    }

    /// Returns the configured corruption recovery policy.
    #[must_use]
    pub const fn policy(&self) -> CorruptFilePolicy {
        self.policy
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn load(&self) -> SnapshotStoreResult<Vec<Task>> {
        let contents = match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(SnapshotStoreError::io(err)),
        };
        match serde_json::from_str(&contents) {
            Ok(tasks) => Ok(tasks),
            Err(err) => match self.policy {
                CorruptFilePolicy::TreatAsEmpty => Ok(Vec::new()),
                CorruptFilePolicy::FailFast => Err(SnapshotStoreError::corrupt(err)),
            },
        }
    }

    async fn save(&self, tasks: &[Task]) -> SnapshotStoreResult<()> {
        let encoded = serde_json::to_vec_pretty(tasks).map_err(SnapshotStoreError::encode)?;
        self.dir
            .write(&self.temp_name, encoded)
            .map_err(SnapshotStoreError::io)?;
        self.dir
            .rename(&self.temp_name, &self.dir, &self.file_name)
            .map_err(SnapshotStoreError::io)
    }
}
