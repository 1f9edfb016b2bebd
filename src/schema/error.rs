//! Validation errors

use std::fmt;

use serde::Serialize;

use super::FieldKind;

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A required field was absent, null, or an empty string
    Required,
    /// The value could not be cast to the field's type
    Cast {
        /// Type the field expects
        expected: FieldKind,
        /// The offending value, as JSON
        value: String,
    },
    /// The candidate was not a document at all
    NotADocument,
}

/// One field-level failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field path
    pub path: String,
    /// Failure reason
    #[serde(flatten)]
    pub kind: FieldErrorKind,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    /// A required field is missing
    #[must_use]
    pub fn required(path: &str) -> Self {
        Self {
            path: path.to_string(),
            kind: FieldErrorKind::Required,
            message: format!("Path `{path}` is required."),
        }
    }

    /// A value could not be cast
    #[must_use]
    pub fn cast(path: &str, expected: FieldKind, value: &serde_json::Value) -> Self {
        let value = value.to_string();
        Self {
            path: path.to_string(),
            message: format!("Cast to {expected} failed for value {value} at path \"{path}\""),
            kind: FieldErrorKind::Cast { expected, value },
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return f.write_str(&self.message);
        }
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A candidate record failed schema validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Model the candidate was validated against
    pub model: String,
    /// Failures in schema field order
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Collect field errors for a model
    #[must_use]
    pub fn new(model: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            model: model.into(),
            errors,
        }
    }

    /// The candidate was not a JSON object
    #[must_use]
    pub fn not_a_document(model: impl Into<String>, found: &serde_json::Value) -> Self {
        let kind = match found {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        Self::new(
            model,
            vec![FieldError {
                path: String::new(),
                kind: FieldErrorKind::NotADocument,
                message: format!("expected a document, found {kind}"),
            }],
        )
    }

    /// Failure for a given field path
    #[must_use]
    pub fn field(&self, path: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.path == path)
    }

    /// Whether `path` failed the required check
    #[must_use]
    pub fn is_missing(&self, path: &str) -> bool {
        self.field(path).is_some_and(|e| e.kind == FieldErrorKind::Required)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed: ", self.model)?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
