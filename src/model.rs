//! Rating and review model handle
//!
//! Binds the rating and review schema to a document store. Every write goes
//! through schema validation; every read decodes back into a typed record.
//!
//! # Examples
//!
//! ```
//! use rating_review::model::ReviewModel;
//! use rating_review::storage::MemoryStore;
//! use serde_json::json;
//!
//! let model = ReviewModel::new(MemoryStore::new());
//! let created = model
//!     .create(&json!({"rating": 5, "review": "Excellent", "user": "u123"}))
//!     .unwrap();
//! let loaded = model.find_by_id(&created.id).unwrap().unwrap();
//! assert_eq!(loaded, created);
//! ```

use serde_json::{Value, json};

use crate::error::Result;
use crate::models::review::{FIELD_ID, FIELD_VERSION};
use crate::models::{MODEL_NAME, NewReview, ObjectId, RatingAndReview, UserRef};
use crate::schema::{Document, Registry, Schema, ValidationError};
use crate::storage::{DocumentStore, StorageError};

/// Typed access to stored rating and review records
#[derive(Debug)]
pub struct ReviewModel<S> {
    schema: Schema,
    collection: String,
    store: S,
}

impl<S: DocumentStore> ReviewModel<S> {
    /// Model over `store` using the rating and review schema
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_schema(Schema::rating_and_review(), store)
    }

    /// Model over `store` with an explicit schema
    #[must_use]
    pub fn with_schema(schema: Schema, store: S) -> Self {
        let collection = schema.collection();
        Self {
            schema,
            collection,
            store,
        }
    }

    /// Model using the schema registered as `RatingAndReview`
    pub fn from_registry(registry: &Registry, store: S) -> Result<Self> {
        let schema = registry.get(MODEL_NAME)?.clone();
        Ok(Self::with_schema(schema, store))
    }

    /// The schema in use
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Collection the records live in
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Validate a candidate without storing it
    pub fn validate(&self, candidate: &Value) -> std::result::Result<Document, ValidationError> {
        self.schema.validate(candidate)
    }

    /// Validate and persist a candidate
    pub fn create(&self, candidate: &Value) -> Result<RatingAndReview> {
        let mut doc = match self.schema.validate(candidate) {
            Ok(doc) => doc,
            Err(err) => {
                log::debug!("rejected candidate: {err}");
                return Err(err.into());
            },
        };
        doc.insert(FIELD_VERSION.to_string(), json!(0));

        let id = ObjectId::new().to_hex();
        let record = self.decode(&id, doc.clone())?;
        self.store.insert(&self.collection, &id, doc)?;

        log::info!("created {} {}", self.schema.name(), id);
        Ok(record)
    }

    /// Validate and persist a typed candidate
    pub fn create_new(&self, candidate: &NewReview) -> Result<RatingAndReview> {
        self.create(&candidate.to_document())
    }

    /// Load a record by id
    pub fn find_by_id(&self, id: &ObjectId) -> Result<Option<RatingAndReview>> {
        let id = id.to_hex();
        self.store
            .get(&self.collection, &id)?
            .map(|doc| self.decode(&id, doc))
            .transpose()
    }

    /// All records, highest rating first (ties keep insertion order)
    pub fn list(&self) -> Result<Vec<RatingAndReview>> {
        let mut records = self.load_all()?;
        records.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        Ok(records)
    }

    /// Records left by one user, highest rating first
    pub fn find_by_user(&self, user: &UserRef) -> Result<Vec<RatingAndReview>> {
        Ok(self.list()?.into_iter().filter(|r| r.is_by(user)).collect())
    }

    /// Mean rating over all records, or over one user's records
    ///
    /// Returns `None` when there are no ratings to average.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_rating(&self, user: Option<&UserRef>) -> Result<Option<f64>> {
        let ratings: Vec<f64> = self
            .load_all()?
            .iter()
            .filter(|r| user.is_none_or(|u| r.is_by(u)))
            .map(|r| r.rating)
            .collect();

        if ratings.is_empty() {
            return Ok(None);
        }
        Ok(Some(ratings.iter().sum::<f64>() / ratings.len() as f64))
    }

    /// Number of stored records
    pub fn count(&self) -> Result<usize> {
        Ok(self.store.count(&self.collection)?)
    }

    /// Delete a record, returning whether it existed
    pub fn delete(&self, id: &ObjectId) -> Result<bool> {
        let removed = self.store.remove(&self.collection, &id.to_hex())?;
        if removed {
            log::info!("deleted {} {}", self.schema.name(), id);
        }
        Ok(removed)
    }

    fn load_all(&self) -> Result<Vec<RatingAndReview>> {
        self.store
            .all(&self.collection)?
            .into_iter()
            .map(|(id, doc)| self.decode(&id, doc))
            .collect()
    }

    fn decode(&self, id: &str, mut doc: Document) -> Result<RatingAndReview> {
        doc.insert(FIELD_ID.to_string(), Value::String(id.to_string()));
        serde_json::from_value(Value::Object(doc)).map_err(|e| {
            StorageError::Corrupt {
                collection: self.collection.clone(),
                id: id.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
