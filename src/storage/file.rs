//! JSON file storage
//!
//! Each collection lives in `<root>/<collection>.json` as a pretty-printed
//! array of documents, each carrying its id under `_id`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DocumentStore, StorageError};
use crate::schema::Document;

/// A document as written to disk
#[derive(Debug, Serialize, Deserialize)]
struct Entry {
    #[serde(rename = "_id")]
    id: String,
    #[serde(flatten)]
    doc: Document,
}

/// File-backed document store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at a data directory (created on first write)
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a collection file
    #[must_use]
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }

    fn load(&self, collection: &str) -> Result<Vec<Entry>, StorageError> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|source| StorageError::Json { path, source })
    }

    fn save(&self, collection: &str, entries: &[Entry]) -> Result<(), StorageError> {
        let path = self.collection_path(collection);
        // Ensure directory exists
        fs::create_dir_all(&self.root).map_err(|source| StorageError::Io {
            path: self.root.clone(),
            source,
        })?;
        let content = serde_json::to_string_pretty(entries).map_err(|source| StorageError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, content).map_err(|source| StorageError::Io { path, source })?;
        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
    fn insert(&self, collection: &str, id: &str, doc: Document) -> Result<(), StorageError> {
        let mut entries = self.load(collection)?;
        if entries.iter().any(|e| e.id == id) {
            return Err(StorageError::DuplicateId {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        entries.push(Entry {
            id: id.to_string(),
            doc,
        });
        self.save(collection, &entries)?;
        log::debug!("wrote {} document(s) to {}", entries.len(), self.collection_path(collection).display());
        Ok(())
    }

    fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StorageError> {
        Ok(self.load(collection)?.into_iter().find(|e| e.id == id).map(|e| e.doc))
    }

    fn all(&self, collection: &str) -> Result<Vec<(String, Document)>, StorageError> {
        Ok(self.load(collection)?.into_iter().map(|e| (e.id, e.doc)).collect())
    }

    fn remove(&self, collection: &str, id: &str) -> Result<bool, StorageError> {
        let mut entries = self.load(collection)?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        let removed = entries.len() < before;

        if removed {
            self.save(collection, &entries)?;
        }

        Ok(removed)
    }
}
