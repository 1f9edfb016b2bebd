//! In-memory document storage

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::{DocumentStore, StorageError};
use crate::schema::Document;

type Collections = HashMap<String, Vec<(String, Document)>>;

/// Documents held in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn insert(&self, collection: &str, id: &str, doc: Document) -> Result<(), StorageError> {
        let mut collections = self.collections.write().unwrap_or_else(PoisonError::into_inner);
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.iter().any(|(existing, _)| existing == id) {
            return Err(StorageError::DuplicateId {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        docs.push((id.to_string(), doc));
        Ok(())
    }

    fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StorageError> {
        let collections = self.collections.read().unwrap_or_else(PoisonError::into_inner);
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|(existing, _)| existing == id))
            .map(|(_, doc)| doc.clone()))
    }

    fn all(&self, collection: &str) -> Result<Vec<(String, Document)>, StorageError> {
        let collections = self.collections.read().unwrap_or_else(PoisonError::into_inner);
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    fn remove(&self, collection: &str, id: &str) -> Result<bool, StorageError> {
        let mut collections = self.collections.write().unwrap_or_else(PoisonError::into_inner);
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|(existing, _)| existing != id);
        Ok(docs.len() < before)
    }
}
