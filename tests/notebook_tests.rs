//! Notebook persistence integration tests
//!
//! Exercise the notebook use cases against the real JSON file store,
//! the way the CLI wires them together.

use tempfile::tempdir;

use vox_notes::application::Notebook;
use vox_notes::domain::notes::search::filter_notes;
use vox_notes::domain::NoteContent;
use vox_notes::infrastructure::JsonFileStore;

fn content(text: &str) -> NoteContent {
    NoteContent::new(text).expect("test content must be non-empty")
}

#[tokio::test]
async fn notebook_lifecycle_against_the_file_store() {
    let dir = tempdir().expect("Failed to create temp dir");

    let mut notebook = Notebook::open(JsonFileStore::in_dir(dir.path()))
        .await
        .expect("open should succeed on a missing store");
    assert!(notebook.notes().is_empty());

    notebook.create(content("Buy milk")).await.unwrap();
    notebook.create(content("Call Alice")).await.unwrap();

    // Newest first
    assert_eq!(notebook.notes()[0].content.as_str(), "Call Alice");
    assert_eq!(notebook.notes()[1].content.as_str(), "Buy milk");

    // Case-insensitive substring search
    let found = filter_notes(notebook.notes(), "alice");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].content.as_str(), "Call Alice");

    // Delete the older note
    let id = notebook.notes()[1].id.clone();
    assert!(notebook.delete(&id).await.unwrap());
    assert_eq!(notebook.notes().len(), 1);

    // A fresh notebook sees the same state
    let reloaded = Notebook::open(JsonFileStore::in_dir(dir.path()))
        .await
        .expect("reopen should succeed");
    assert_eq!(reloaded.notes().len(), 1);
    assert_eq!(reloaded.notes()[0].content.as_str(), "Call Alice");
}

#[tokio::test]
async fn stored_document_is_a_single_json_array() {
    let dir = tempdir().expect("Failed to create temp dir");

    let mut notebook = Notebook::open(JsonFileStore::in_dir(dir.path()))
        .await
        .unwrap();
    notebook.create(content("hello")).await.unwrap();

    let raw = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let records = value.as_array().expect("store should hold a JSON array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["content"], "hello");
    assert!(records[0]["id"].is_string());
    assert!(records[0]["createdAt"].is_string());
}

#[tokio::test]
async fn malformed_document_starts_empty_and_recovers_on_save() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("notes.json"), "{ not json").unwrap();

    let mut notebook = Notebook::open(JsonFileStore::in_dir(dir.path()))
        .await
        .expect("a malformed store is not an error");
    assert!(notebook.notes().is_empty());

    notebook.create(content("fresh start")).await.unwrap();

    let reloaded = Notebook::open(JsonFileStore::in_dir(dir.path()))
        .await
        .unwrap();
    assert_eq!(reloaded.notes().len(), 1);
    assert_eq!(reloaded.notes()[0].content.as_str(), "fresh start");
}

#[tokio::test]
async fn deleting_every_note_leaves_an_empty_document() {
    let dir = tempdir().expect("Failed to create temp dir");

    let mut notebook = Notebook::open(JsonFileStore::in_dir(dir.path()))
        .await
        .unwrap();
    notebook.create(content("only note")).await.unwrap();

    let id = notebook.notes()[0].id.clone();
    assert!(notebook.delete(&id).await.unwrap());

    let raw = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();
    assert_eq!(raw.trim(), "[]");
}
