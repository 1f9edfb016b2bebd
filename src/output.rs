//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::models::RatingAndReview;
use crate::schema::{FieldDef, Schema, ValidationError};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A review as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct ReviewInfo {
    /// Record id
    pub id: String,
    /// Author user id
    pub user: Option<String>,
    /// Rating value
    pub rating: f64,
    /// Review text
    pub review: String,
    /// Creation time derived from the id (RFC3339)
    pub created_at: Option<String>,
}

impl From<&RatingAndReview> for ReviewInfo {
    fn from(record: &RatingAndReview) -> Self {
        let created_at = chrono::DateTime::from_timestamp(i64::from(record.id.timestamp()), 0)
            .map(|t| t.to_rfc3339());
        Self {
            id: record.id.to_hex(),
            user: record.user.as_ref().map(ToString::to_string),
            rating: record.rating,
            review: record.review.clone(),
            created_at,
        }
    }
}

/// Result of creating a review
#[derive(Debug, Serialize)]
pub struct CreateResult {
    /// Whether the review was stored
    pub success: bool,
    /// The stored review
    pub review: ReviewInfo,
}

/// Result of looking up a single review
#[derive(Debug, Serialize)]
pub struct ReviewShowResult {
    /// Whether the review exists
    pub found: bool,
    /// The id that was looked up
    pub id: String,
    /// The review, when found
    pub review: Option<ReviewInfo>,
}

/// Result of listing reviews
#[derive(Debug, Serialize)]
pub struct ReviewListResult {
    /// Number of reviews
    pub total: usize,
    /// Reviews, highest rating first
    pub reviews: Vec<ReviewInfo>,
}

/// Result of an average rating query
#[derive(Debug, Serialize)]
pub struct AverageResult {
    /// User filter, if any
    pub user: Option<String>,
    /// Number of ratings averaged
    pub count: usize,
    /// Mean rating (None when there are no ratings)
    pub average: Option<f64>,
}

/// Schema description
#[derive(Debug, Serialize)]
pub struct SchemaResult {
    /// Model name
    pub model: String,
    /// Storage collection
    pub collection: String,
    /// Declared fields
    pub fields: Vec<FieldDef>,
}

impl From<&Schema> for SchemaResult {
    fn from(schema: &Schema) -> Self {
        Self {
            model: schema.name().to_string(),
            collection: schema.collection(),
            fields: schema.fields().to_vec(),
        }
    }
}

/// Validation failure report
#[derive(Debug, Serialize)]
pub struct ValidationFailure<'a> {
    /// Always false
    pub success: bool,
    /// The failure
    pub error: &'a ValidationError,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn print_review(r: &ReviewInfo) {
    println!("  [{}] {}", r.id, format_rating(r.rating).bold());
    if let Some(user) = &r.user {
        println!("  User:   {user}");
    }
    println!("  Review: {}\n", r.review);
}

/// Format a rating without a trailing `.0` for whole numbers
#[must_use]
pub fn format_rating(rating: f64) -> String {
    if rating.fract().abs() < f64::EPSILON && rating.abs() < 1e15 {
        format!("{rating:.0}")
    } else {
        format!("{rating}")
    }
}

impl CreateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{} review {}", "Created".green(), self.review.id);
                println!("  Rating: {}", format_rating(self.review.rating));
                if let Some(user) = &self.review.user {
                    println!("  User:   {user}");
                }
                println!("  Review: {}", self.review.review);
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl ReviewShowResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.review {
                Some(review) => print_review(review),
                None => println!("Review not found: {}", self.id),
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl ReviewListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.reviews.is_empty() {
                    println!("No reviews found.");
                    return;
                }
                println!("Reviews ({}):\n", self.total);
                for review in &self.reviews {
                    print_review(review);
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl AverageResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match self.average {
                Some(avg) => println!("Average rating: {avg:.2} ({} rating(s))", self.count),
                None => println!("No ratings yet."),
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl SchemaResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{} (collection: {})\n", self.model.bold(), self.collection);
                for field in &self.fields {
                    let mut line = format!("  {:<8} {}", field.name, field.kind);
                    if field.required {
                        line.push_str(", required");
                    }
                    if let Some(model) = &field.reference {
                        line.push_str(&format!(", ref {model}"));
                    }
                    println!("{line}");
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl ValidationFailure<'_> {
    /// Render the failure; human mode writes to stderr
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                eprintln!("{} {}", "error:".red().bold(), self.error);
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}
