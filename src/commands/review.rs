//! Review commands - create, show, list, average, delete

use serde_json::{Map, Value};

use rating_review::Error;
use rating_review::model::ReviewModel;
use rating_review::models::{ObjectId, UserRef};
use rating_review::models::review::{FIELD_RATING, FIELD_REVIEW, FIELD_USER};
use rating_review::output::{
    AverageResult, CreateResult, OperationResult, OutputMode, ReviewInfo, ReviewListResult,
    ReviewShowResult, ValidationFailure,
};
use rating_review::storage::DocumentStore;

/// Validate and store a new review from command-line values
pub fn create<S: DocumentStore>(
    model: &ReviewModel<S>,
    user: Option<String>,
    rating: Option<String>,
    review: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    // Rating stays a string so the schema's number cast decides what is valid
    let mut candidate = Map::new();
    for (field, value) in [(FIELD_USER, user), (FIELD_RATING, rating), (FIELD_REVIEW, review)] {
        if let Some(value) = value {
            candidate.insert(field.to_string(), Value::String(value));
        }
    }

    match model.create(&Value::Object(candidate)) {
        Ok(record) => {
            CreateResult {
                success: true,
                review: ReviewInfo::from(&record),
            }
            .render(mode);
            Ok(())
        },
        Err(Error::Validation(err)) => {
            ValidationFailure {
                success: false,
                error: &err,
            }
            .render(mode);
            std::process::exit(1);
        },
        Err(e) => Err(e.into()),
    }
}

/// Show one review
pub fn show<S: DocumentStore>(
    model: &ReviewModel<S>,
    id: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let object_id: ObjectId = id.parse()?;
    let review = model.find_by_id(&object_id)?;

    ReviewShowResult {
        found: review.is_some(),
        id: id.to_string(),
        review: review.as_ref().map(ReviewInfo::from),
    }
    .render(mode);

    Ok(())
}

/// List reviews, optionally for one user
pub fn list<S: DocumentStore>(
    model: &ReviewModel<S>,
    user: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let records = match parse_user(user)? {
        Some(user) => model.find_by_user(&user)?,
        None => model.list()?,
    };

    let reviews: Vec<ReviewInfo> = records.iter().map(ReviewInfo::from).collect();
    ReviewListResult {
        total: reviews.len(),
        reviews,
    }
    .render(mode);

    Ok(())
}

/// Average rating, optionally for one user
pub fn average<S: DocumentStore>(
    model: &ReviewModel<S>,
    user: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let user = parse_user(user)?;
    let count = match &user {
        Some(u) => model.find_by_user(u)?.len(),
        None => model.count()?,
    };
    let average = model.average_rating(user.as_ref())?;

    AverageResult {
        user: user.map(|u| u.to_string()),
        count,
        average,
    }
    .render(mode);

    Ok(())
}

/// Delete one review
pub fn delete<S: DocumentStore>(
    model: &ReviewModel<S>,
    id: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let object_id: ObjectId = id.parse()?;
    let removed = model.delete(&object_id)?;

    OperationResult {
        success: removed,
        message: if removed {
            format!("Deleted review {id}")
        } else {
            format!("Review not found: {id}")
        },
    }
    .render(mode);

    if !removed {
        std::process::exit(1);
    }
    Ok(())
}

fn parse_user(user: Option<&str>) -> anyhow::Result<Option<UserRef>> {
    user.map(|u| UserRef::new(u).ok_or_else(|| anyhow::anyhow!("user id must not be empty")))
        .transpose()
}
