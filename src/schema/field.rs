//! Field definitions and value casting

use std::fmt;

use serde::Serialize;
use serde_json::{Value, json};

/// The storage type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    /// Reference to another record by id
    ObjectId,
    /// Numeric value
    Number,
    /// Text value
    String,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectId => write!(f, "ObjectId"),
            Self::Number => write!(f, "Number"),
            Self::String => write!(f, "String"),
        }
    }
}

/// Outcome of casting a raw value to a field kind
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cast {
    /// Value converted to the field's representation
    Value(Value),
    /// Value casts to nothing (treated as absent)
    Empty,
    /// Value cannot be represented as the field kind
    Failed,
}

impl FieldKind {
    /// Cast a raw document value to this kind
    pub(crate) fn cast(self, value: &Value) -> Cast {
        match (self, value) {
            (_, Value::Null) => Cast::Empty,

            (Self::Number, Value::Number(_)) => Cast::Value(value.clone()),
            (Self::Number, Value::Bool(b)) => Cast::Value(json!(u8::from(*b))),
            (Self::Number, Value::String(s)) => {
                if s.is_empty() {
                    return Cast::Empty;
                }
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Cast::Value(json!(0));
                }
                if let Ok(n) = trimmed.parse::<i64>() {
                    return Cast::Value(json!(n));
                }
                match trimmed.parse::<f64>() {
                    Ok(n) if n.is_finite() => Cast::Value(json!(n)),
                    _ => Cast::Failed,
                }
            },

            (Self::String, Value::String(_)) => Cast::Value(value.clone()),
            (Self::String, Value::Number(n)) => Cast::Value(Value::String(number_to_string(n))),
            (Self::String, Value::Bool(b)) => Cast::Value(Value::String(b.to_string())),

            (Self::ObjectId, Value::String(s)) if s.is_empty() => Cast::Empty,
            (Self::ObjectId, Value::String(_)) => Cast::Value(value.clone()),

            _ => Cast::Failed,
        }
    }

    /// Whether a cast value satisfies a `required` constraint
    pub(crate) fn satisfies_required(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => false,
            (Self::String, Value::String(s)) => !s.is_empty(),
            _ => true,
        }
    }
}

/// Render a number the way it would print as text: `4.0` becomes `"4"`
fn number_to_string(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract().abs() < f64::EPSILON && f.abs() < 1e15 => {
            format!("{:.0}", f + 0.0)
        },
        _ => n.to_string(),
    }
}

/// A single field in a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// Field path in the document
    pub name: String,
    /// Storage type
    pub kind: FieldKind,
    /// Whether the field must be present on creation
    pub required: bool,
    /// Model referenced by an `ObjectId` field
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl FieldDef {
    /// Optional field of the given kind
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            reference: None,
        }
    }

    /// Reference to another model by id
    #[must_use]
    pub fn reference(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            reference: Some(model.into()),
            ..Self::new(name, FieldKind::ObjectId)
        }
    }

    /// Mark the field required
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
