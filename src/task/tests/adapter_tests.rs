//! Adapter tests for the JSON file snapshot store.

use crate::task::{
    adapters::{CorruptFilePolicy, JsonFileSnapshotStore},
    domain::{Task, TaskTitle},
    ports::{SnapshotStore, SnapshotStoreError},
};
use camino::Utf8PathBuf;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct StoreDir {
    // Held so the directory outlives the store handle.
    _dir: TempDir,
    path: Utf8PathBuf,
}

#[fixture]
fn store_dir() -> StoreDir {
    let dir = TempDir::new().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("tasks.json")).expect("utf8 temp path");
    StoreDir { _dir: dir, path }
}

fn sample_task(title: &str) -> Task {
    Task::new(
        TaskTitle::new(title).expect("valid title"),
        String::new(),
        &DefaultClock,
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_file_loads_as_empty_collection(store_dir: StoreDir) {
    let store = JsonFileSnapshotStore::open(&store_dir.path, CorruptFilePolicy::TreatAsEmpty)
        .expect("store should open");
    let tasks = store.load().await.expect("load should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_then_load_round_trips(store_dir: StoreDir) {
    let store = JsonFileSnapshotStore::open(&store_dir.path, CorruptFilePolicy::TreatAsEmpty)
        .expect("store should open");
    let tasks = vec![sample_task("Buy milk"), sample_task("Water plants")];

    store.save(&tasks).await.expect("save should succeed");
    let loaded = store.load().await.expect("load should succeed");
    assert_eq!(loaded, tasks);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn snapshot_file_holds_a_bare_array_of_records(store_dir: StoreDir) {
    let store = JsonFileSnapshotStore::open(&store_dir.path, CorruptFilePolicy::TreatAsEmpty)
        .expect("store should open");
    store
        .save(&[sample_task("Buy milk")])
        .await
        .expect("save should succeed");

    let contents = std::fs::read_to_string(&store_dir.path).expect("snapshot file");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("valid JSON");
    let records = value.as_array().expect("bare array");
    assert_eq!(records.len(), 1);
    let record = records
        .first()
        .and_then(serde_json::Value::as_object)
        .expect("object record");
    for field in ["id", "title", "description", "status", "created_at"] {
        assert!(record.get(field).is_some_and(serde_json::Value::is_string));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_leaves_no_temporary_sibling_behind(store_dir: StoreDir) {
    let store = JsonFileSnapshotStore::open(&store_dir.path, CorruptFilePolicy::TreatAsEmpty)
        .expect("store should open");
    store
        .save(&[sample_task("Buy milk")])
        .await
        .expect("save should succeed");

    let parent = store_dir.path.parent().expect("temp parent");
    let entries: Vec<String> = std::fs::read_dir(parent)
        .expect("readable dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["tasks.json".to_owned()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_file_loads_as_empty_under_treat_as_empty(store_dir: StoreDir) {
    std::fs::write(&store_dir.path, "{ not json").expect("write corrupt file");
    let store = JsonFileSnapshotStore::open(&store_dir.path, CorruptFilePolicy::TreatAsEmpty)
        .expect("store should open");

    let tasks = store.load().await.expect("load should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_file_is_rejected_under_fail_fast(store_dir: StoreDir) {
    std::fs::write(&store_dir.path, "{ not json").expect("write corrupt file");
    let store = JsonFileSnapshotStore::open(&store_dir.path, CorruptFilePolicy::FailFast)
        .expect("store should open");

    let result = store.load().await;
    assert!(matches!(result, Err(SnapshotStoreError::Corrupt(_))));
}

#[rstest]
fn open_rejects_path_without_file_name(store_dir: StoreDir) {
    let parent = store_dir.path.parent().expect("temp parent");
    // A trailing ".." path has no final file-name component.
    let result = JsonFileSnapshotStore::open(parent.join(".."), CorruptFilePolicy::TreatAsEmpty);
    assert!(matches!(result, Err(SnapshotStoreError::Io(_))));
}
