//! Record schemas
//!
//! A schema names a record type and lists its fields. Validation casts each
//! declared field to its kind, enforces `required`, and drops undeclared
//! keys. All field failures are reported together in one `ValidationError`.
//!
//! # Examples
//!
//! ```
//! use rating_review::schema::Schema;
//! use serde_json::json;
//!
//! let schema = Schema::rating_and_review();
//! assert!(schema.validate(&json!({"rating": 5, "review": "Excellent"})).is_ok());
//! assert!(schema.validate(&json!({"review": "Good"})).is_err());
//! ```

mod error;
mod field;
mod registry;

use serde::Serialize;
use serde_json::{Map, Value};

pub use error::{FieldError, FieldErrorKind, ValidationError};
pub use field::{FieldDef, FieldKind};
pub use registry::{Registry, RegistryError};

use crate::models::{USER_MODEL, review};
use field::Cast;

/// A stored document: field name to JSON value
pub type Document = Map<String, Value>;

/// Named record definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    name: String,
    fields: Vec<FieldDef>,
}

impl Schema {
    /// Empty schema for a model name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field
    #[must_use]
    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.push(def);
        self
    }

    /// The rating and review schema:
    /// `user` (ref `User`), `rating` (required number), `review` (required string)
    #[must_use]
    pub fn rating_and_review() -> Self {
        Self::new(review::MODEL_NAME)
            .field(FieldDef::reference(review::FIELD_USER, USER_MODEL))
            .field(FieldDef::new(review::FIELD_RATING, FieldKind::Number).required())
            .field(FieldDef::new(review::FIELD_REVIEW, FieldKind::String).required())
    }

    /// Model name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields in order
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Definition of a named field
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Storage collection: the model name lowercased and pluralised
    #[must_use]
    pub fn collection(&self) -> String {
        let lower = self.name.to_lowercase();
        if lower.ends_with('s') { lower } else { format!("{lower}s") }
    }

    /// Validate a candidate, returning the cast document
    pub fn validate(&self, candidate: &Value) -> Result<Document, ValidationError> {
        let Value::Object(input) = candidate else {
            return Err(ValidationError::not_a_document(&self.name, candidate));
        };

        let mut doc = Document::new();
        let mut errors = Vec::new();

        for def in &self.fields {
            let cast = input.get(&def.name).map_or(Cast::Empty, |v| def.kind.cast(v));
            match cast {
                Cast::Failed => {
                    // cast() only fails on a present value
                    let raw = input.get(&def.name).unwrap_or(&Value::Null);
                    errors.push(FieldError::cast(&def.name, def.kind, raw));
                },
                Cast::Empty => {
                    if def.required {
                        errors.push(FieldError::required(&def.name));
                    }
                },
                Cast::Value(value) => {
                    if def.required && !def.kind.satisfies_required(&value) {
                        errors.push(FieldError::required(&def.name));
                    } else {
                        doc.insert(def.name.clone(), value);
                    }
                },
            }
        }

        let dropped: Vec<&str> = input
            .keys()
            .map(String::as_str)
            .filter(|k| self.get_field(k).is_none())
            .collect();
        if !dropped.is_empty() {
            log::debug!("{}: ignoring undeclared keys {:?}", self.name, dropped);
        }

        if errors.is_empty() {
            Ok(doc)
        } else {
            Err(ValidationError::new(&self.name, errors))
        }
    }
}

/// Validate a candidate against the rating and review schema
pub fn validate(candidate: &Value) -> Result<Document, ValidationError> {
    Schema::rating_and_review().validate(candidate)
}
