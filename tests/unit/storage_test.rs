//! Tests for storage backends (memory and JSON file)

use rating_review::storage::{self, Backend, DocumentStore, JsonFileStore, MemoryStore, StorageError};
use serde_json::{Map, Value, json};
use tempfile::TempDir;

fn doc(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

/// Behaviour every backend must share
fn exercise_store(store: &dyn DocumentStore) {
    assert!(store.all("reviews").unwrap().is_empty());
    assert_eq!(store.count("reviews").unwrap(), 0);

    store.insert("reviews", "a", doc(json!({"rating": 1}))).unwrap();
    store.insert("reviews", "b", doc(json!({"rating": 2}))).unwrap();
    store.insert("other", "a", doc(json!({"x": true}))).unwrap();

    assert_eq!(store.get("reviews", "a").unwrap(), Some(doc(json!({"rating": 1}))));
    assert_eq!(store.get("reviews", "missing").unwrap(), None);
    assert_eq!(store.count("reviews").unwrap(), 2);

    let ids: Vec<String> = store.all("reviews").unwrap().into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, ["a", "b"]);

    let err = store.insert("reviews", "a", Map::new()).unwrap_err();
    assert!(matches!(err, StorageError::DuplicateId { .. }));

    assert!(store.remove("reviews", "a").unwrap());
    assert!(!store.remove("reviews", "a").unwrap());
    assert!(!store.remove("nothing-here", "a").unwrap());
    assert_eq!(store.count("reviews").unwrap(), 1);
    assert_eq!(store.count("other").unwrap(), 1);
}

// =============================================================================
// BACKEND TESTS
// =============================================================================

#[test]
fn test_backend_from_str_memory() {
    assert_eq!("memory".parse::<Backend>().unwrap(), Backend::Memory);
    assert_eq!("MEM".parse::<Backend>().unwrap(), Backend::Memory);
}

#[test]
fn test_backend_from_str_file() {
    assert_eq!("file".parse::<Backend>().unwrap(), Backend::File);
    assert_eq!("files".parse::<Backend>().unwrap(), Backend::File);
    assert_eq!("JSON".parse::<Backend>().unwrap(), Backend::File);
}

#[test]
fn test_backend_from_str_unknown() {
    let result = "mongo".parse::<Backend>();
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Unknown backend"));
}

#[test]
fn test_backend_default_and_display() {
    assert_eq!(Backend::default(), Backend::File);
    assert_eq!(Backend::File.to_string(), "file");
    assert_eq!(Backend::Memory.to_string(), "memory");
}

// =============================================================================
// MEMORY STORE TESTS
// =============================================================================

#[test]
fn test_memory_store() {
    exercise_store(&MemoryStore::new());
}

// =============================================================================
// FILE STORE TESTS
// =============================================================================

#[test]
fn test_file_store() {
    let temp = TempDir::new().unwrap();
    exercise_store(&JsonFileStore::new(temp.path().join("data")));
}

#[test]
fn test_file_store_persists_across_instances() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("data");

    JsonFileStore::new(&root).insert("reviews", "x1", doc(json!({"review": "kept"}))).unwrap();

    let reopened = JsonFileStore::new(&root);
    assert_eq!(reopened.get("reviews", "x1").unwrap(), Some(doc(json!({"review": "kept"}))));
}

#[test]
fn test_file_store_layout() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp.path());
    store.insert("ratingandreviews", "abc", doc(json!({"rating": 5}))).unwrap();

    let path = store.collection_path("ratingandreviews");
    assert!(path.ends_with("ratingandreviews.json"));

    let content: Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(content, json!([{"_id": "abc", "rating": 5}]));
}

#[test]
fn test_file_store_rejects_malformed_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("reviews.json"), "{not json").unwrap();

    let err = JsonFileStore::new(temp.path()).all("reviews").unwrap_err();
    assert!(matches!(err, StorageError::Json { .. }));
}

#[test]
fn test_file_store_treats_empty_file_as_empty() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("reviews.json"), "").unwrap();
    assert!(JsonFileStore::new(temp.path()).all("reviews").unwrap().is_empty());
}

#[test]
fn test_open_selects_backend() {
    let temp = TempDir::new().unwrap();
    let store = storage::open(Backend::File, temp.path());
    store.insert("c", "1", Map::new()).unwrap();
    assert!(temp.path().join("c.json").exists());

    let memory = storage::open(Backend::Memory, temp.path());
    assert_eq!(memory.count("c").unwrap(), 0);
}
