//! Shared test fixtures and helpers

use rating_review::model::ReviewModel;
use rating_review::storage::{JsonFileStore, MemoryStore};
use serde_json::{Value, json};
use tempfile::TempDir;

/// A file-backed model rooted in a temporary data directory
pub struct TempModel {
    dir: TempDir,
    /// The model under test
    pub model: ReviewModel<JsonFileStore>,
}

impl TempModel {
    /// Create a model over an empty temporary directory
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let model = ReviewModel::new(JsonFileStore::new(dir.path().join("data")));
        Self { dir, model }
    }

    /// Path of the temporary directory
    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// A second store pointing at the same data directory
    pub fn reopen(&self) -> ReviewModel<JsonFileStore> {
        ReviewModel::new(JsonFileStore::new(self.dir.path().join("data")))
    }
}

impl Default for TempModel {
    fn default() -> Self {
        Self::new()
    }
}

/// A model over a fresh in-memory store
pub fn memory_model() -> ReviewModel<MemoryStore> {
    ReviewModel::new(MemoryStore::new())
}

/// A complete, valid candidate
pub fn candidate(user: &str, rating: f64, review: &str) -> Value {
    json!({ "user": user, "rating": rating, "review": review })
}
