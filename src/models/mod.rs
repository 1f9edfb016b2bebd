//! Data models for rating-review
//!
//! Core abstractions:
//! - `RatingAndReview`: a persisted rating plus review text, linked to a user
//! - `NewReview`: a candidate that has not been validated yet
//! - `ObjectId` / `UserRef`: record identifiers and user references

mod object_id;
pub mod review;
mod user;

pub use object_id::{OBJECT_ID_LEN, ObjectId, ParseObjectIdError};
pub use review::{MODEL_NAME, NewReview, RatingAndReview};
pub use user::{USER_MODEL, UserRef};
