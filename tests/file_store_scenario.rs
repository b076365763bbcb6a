//! End-to-end scenarios for the file-backed task store.

use std::sync::Arc;

use camino::Utf8PathBuf;
use eyre::{OptionExt, Result};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskboard::task::{
    adapters::{CorruptFilePolicy, JsonFileSnapshotStore},
    domain::{TaskId, TaskStatus},
    services::{AddTaskRequest, TaskStore, UpdateTaskPatch},
};
use tempfile::TempDir;

type FileStore = TaskStore<JsonFileSnapshotStore, DefaultClock>;

struct Fixture {
    // Held so the directory outlives the stores.
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl Fixture {
    fn open_store(&self) -> Result<FileStore> {
        let snapshot = JsonFileSnapshotStore::open(&self.path, CorruptFilePolicy::TreatAsEmpty)?;
        Ok(TaskStore::new(Arc::new(snapshot), Arc::new(DefaultClock)))
    }
}

#[fixture]
fn fixture() -> Fixture {
    let dir = TempDir::new().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("tasks.json")).expect("utf8 temp path");
    Fixture { _dir: dir, path }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lifecycle_scenario_against_a_real_file(fixture: Fixture) -> Result<()> {
    let store = fixture.open_store()?;

    assert!(store.list(None).await?.is_empty());

    let task = store
        .add(AddTaskRequest::new("Buy milk").with_description(""))
        .await?;
    let listed = store.list(None).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(
        listed.first().ok_or_eyre("one task")?.status(),
        TaskStatus::Pending
    );

    store
        .update(task.id(), UpdateTaskPatch::new().with_status(TaskStatus::Done))
        .await?;
    assert!(store.list(Some(TaskStatus::Pending)).await?.is_empty());
    let done = store.list(Some(TaskStatus::Done)).await?;
    assert_eq!(done.len(), 1);
    assert_eq!(done.first().ok_or_eyre("one task")?.id(), task.id());

    assert!(store.delete(task.id()).await?);
    assert!(store.list(None).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_an_unknown_id_leaves_the_file_untouched(fixture: Fixture) -> Result<()> {
    let store = fixture.open_store()?;
    store.add(AddTaskRequest::new("Buy milk")).await?;

    let before = std::fs::read(&fixture.path)?;
    assert!(!store.delete(TaskId::new()).await?);
    let after = std::fs::read(&fixture.path)?;
    assert_eq!(before, after);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_second_store_sees_writes_through_the_shared_file(fixture: Fixture) -> Result<()> {
    let writer = fixture.open_store()?;
    let reader = fixture.open_store()?;

    let task = writer.add(AddTaskRequest::new("Buy milk")).await?;
    let seen = reader.get(task.id()).await?;
    assert_eq!(seen, task);

    writer
        .update(task.id(), UpdateTaskPatch::new().with_status(TaskStatus::Done))
        .await?;
    assert_eq!(reader.get(task.id()).await?.status(), TaskStatus::Done);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_file_recovers_as_an_empty_collection(fixture: Fixture) -> Result<()> {
    std::fs::write(&fixture.path, "not a snapshot")?;
    let store = fixture.open_store()?;

    assert!(store.list(None).await?.is_empty());

    // The first successful write replaces the corrupt content.
    store.add(AddTaskRequest::new("Buy milk")).await?;
    assert_eq!(store.list(None).await?.len(), 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_adds_are_not_lost(fixture: Fixture) -> Result<()> {
    let store = Arc::new(fixture.open_store()?);

    let mut handles = Vec::new();
    for round in 0..8 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.add(AddTaskRequest::new(format!("task {round}"))).await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    assert_eq!(store.list(None).await?.len(), 8);
    Ok(())
}
