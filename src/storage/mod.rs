//! Storage abstraction for record documents
//!
//! Provides pluggable backends:
//! - `memory`: process-local maps (tests, one-shot use)
//! - `file`: one JSON file per collection (default)

/// JSON file storage
pub mod file;
/// In-memory storage
pub mod memory;

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::Document;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors raised by storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure
    #[error("io error at {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A collection file could not be parsed or written as JSON
    #[error("invalid json in {path}: {source}")]
    Json {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// An insert reused an existing id
    #[error("duplicate id {id} in collection {collection}")]
    DuplicateId {
        /// Collection name
        collection: String,
        /// Conflicting id
        id: String,
    },

    /// A stored document no longer matches its schema
    #[error("corrupt document {id} in collection {collection}: {reason}")]
    Corrupt {
        /// Collection name
        collection: String,
        /// Document id
        id: String,
        /// What was wrong with it
        reason: String,
    },
}

/// Storage backend for documents, keyed by collection and id
pub trait DocumentStore: Send + Sync {
    /// Insert a document under a new id
    fn insert(&self, collection: &str, id: &str, doc: Document) -> Result<(), StorageError>;

    /// Fetch a document by id
    fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StorageError>;

    /// All documents in a collection, in insertion order, paired with their ids
    fn all(&self, collection: &str) -> Result<Vec<(String, Document)>, StorageError>;

    /// Remove a document, returning whether it existed
    fn remove(&self, collection: &str, id: &str) -> Result<bool, StorageError>;

    /// Number of documents in a collection
    fn count(&self, collection: &str) -> Result<usize, StorageError> {
        Ok(self.all(collection)?.len())
    }
}

impl<T: DocumentStore + ?Sized> DocumentStore for Box<T> {
    fn insert(&self, collection: &str, id: &str, doc: Document) -> Result<(), StorageError> {
        (**self).insert(collection, id, doc)
    }

    fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StorageError> {
        (**self).get(collection, id)
    }

    fn all(&self, collection: &str) -> Result<Vec<(String, Document)>, StorageError> {
        (**self).all(collection)
    }

    fn remove(&self, collection: &str, id: &str) -> Result<bool, StorageError> {
        (**self).remove(collection, id)
    }

    fn count(&self, collection: &str) -> Result<usize, StorageError> {
        (**self).count(collection)
    }
}

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Process-local memory
    Memory,
    /// JSON files under a data directory (default)
    #[default]
    File,
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "files" | "json" => Ok(Self::File),
            _ => Err(format!("Unknown backend: {s}. Use 'memory' or 'file'")),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Open a store for the given backend
#[must_use]
pub fn open(backend: Backend, data_dir: impl Into<PathBuf>) -> Box<dyn DocumentStore> {
    match backend {
        Backend::Memory => Box::new(MemoryStore::new()),
        Backend::File => Box::new(JsonFileStore::new(data_dir)),
    }
}
