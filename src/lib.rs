//! rating-review - Rating and review records with schema validation
//!
//! This library defines the `RatingAndReview` record (a user reference, a
//! numeric rating and review text), validates candidates against its schema,
//! and persists records through a pluggable document store.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod model;
pub mod models;
pub mod output;
pub mod paths;
pub mod schema;
pub mod storage;

pub use error::{Error, Result};
