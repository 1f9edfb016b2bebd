//! Rating and review model
//!
//! A rating and review is the feedback a user leaves: a numeric rating and
//! a free-text review, linked to the user who wrote it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::{ObjectId, UserRef};

/// Lookup name of the record type
pub const MODEL_NAME: &str = "RatingAndReview";

/// Field holding the user reference
pub const FIELD_USER: &str = "user";
/// Field holding the numeric rating
pub const FIELD_RATING: &str = "rating";
/// Field holding the review text
pub const FIELD_REVIEW: &str = "review";
/// Identifier key assigned by the store
pub const FIELD_ID: &str = "_id";
/// Version key assigned on creation
pub const FIELD_VERSION: &str = "__v";

/// A persisted rating and review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingAndReview {
    /// Record identifier
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// The user who left the review
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,

    /// Numeric rating (no range is enforced)
    pub rating: f64,

    /// Review text
    pub review: String,

    /// Document version
    #[serde(rename = "__v", default)]
    pub version: u32,
}

impl RatingAndReview {
    /// Whether this review was written by `user`
    #[must_use]
    pub fn is_by(&self, user: &UserRef) -> bool {
        self.user.as_ref() == Some(user)
    }
}

/// A candidate review, every field optional until validated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewReview {
    /// User id of the author
    pub user: Option<String>,
    /// Rating value
    pub rating: Option<f64>,
    /// Review text
    pub review: Option<String>,
}

impl NewReview {
    /// Create a candidate with all three fields set
    #[must_use]
    pub fn new(user: impl Into<String>, rating: f64, review: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            rating: Some(rating),
            review: Some(review.into()),
        }
    }

    /// Set the author
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the rating
    #[must_use]
    pub const fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the review text
    #[must_use]
    pub fn review(mut self, review: impl Into<String>) -> Self {
        self.review = Some(review.into());
        self
    }

    /// Render as a document for validation; unset fields are left out
    #[must_use]
    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        if let Some(user) = &self.user {
            doc.insert(FIELD_USER.to_string(), Value::String(user.clone()));
        }
        if let Some(rating) = self.rating {
            doc.insert(FIELD_RATING.to_string(), json!(rating));
        }
        if let Some(review) = &self.review {
            doc.insert(FIELD_REVIEW.to_string(), Value::String(review.clone()));
        }
        Value::Object(doc)
    }
}
