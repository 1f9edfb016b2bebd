//! User reference
//!
//! Reviews point at a `User` owned by the surrounding application. The
//! reference is a lookup handle only; nothing here loads or checks the user.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ObjectId;

/// Name of the model a `UserRef` points at
pub const USER_MODEL: &str = "User";

/// Non-owning reference to an external user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRef(String);

impl UserRef {
    /// Wrap a user id. Returns `None` for empty ids.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() { None } else { Some(Self(id)) }
    }

    /// The raw id
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id parsed as an object id, if it has that shape
    #[must_use]
    pub fn object_id(&self) -> Option<ObjectId> {
        self.0.parse().ok()
    }
}

impl From<ObjectId> for UserRef {
    fn from(id: ObjectId) -> Self {
        Self(id.to_hex())
    }
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
