//! Crate-level error type

use thiserror::Error;

use crate::schema::{RegistryError, ValidationError};
use crate::storage::StorageError;

/// Errors returned by model operations
#[derive(Debug, Error)]
pub enum Error {
    /// Candidate record failed schema validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Model lookup or registration failed
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Storage backend failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl Error {
    /// The validation failure, if this is one
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Result alias for model operations
pub type Result<T> = std::result::Result<T, Error>;
