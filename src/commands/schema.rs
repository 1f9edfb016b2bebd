//! Schema command - describe the record schema

use rating_review::model::ReviewModel;
use rating_review::output::{OutputMode, SchemaResult};
use rating_review::storage::DocumentStore;

/// Print the schema the model validates against
pub fn schema<S: DocumentStore>(model: &ReviewModel<S>, mode: OutputMode) -> anyhow::Result<()> {
    SchemaResult::from(model.schema()).render(mode);
    Ok(())
}
