//! Model registry
//!
//! A caller-owned lookup table from model name to schema. Callers build one
//! and pass it where models are resolved; there is no process-wide instance.

use std::collections::HashMap;

use thiserror::Error;

use super::Schema;

/// Errors raised by the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A schema is already registered under this name
    #[error("cannot overwrite `{0}` model once registered")]
    Overwrite(String),

    /// No schema is registered under this name
    #[error("schema hasn't been registered for model \"{0}\"")]
    Missing(String),
}

/// Named schemas available to the persistence layer
#[derive(Debug, Clone, Default)]
pub struct Registry {
    schemas: HashMap<String, Schema>,
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under its model name
    pub fn register(&mut self, schema: Schema) -> Result<&Schema, RegistryError> {
        let name = schema.name().to_string();
        if self.schemas.contains_key(&name) {
            return Err(RegistryError::Overwrite(name));
        }
        log::debug!("registered model {name} (collection {})", schema.collection());
        Ok(self.schemas.entry(name).or_insert(schema))
    }

    /// Look up a schema by model name
    pub fn get(&self, name: &str) -> Result<&Schema, RegistryError> {
        self.schemas.get(name).ok_or_else(|| RegistryError::Missing(name.to_string()))
    }

    /// Whether a model name is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Registered model names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
