//! Global tag-frequency model.

use qanda_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tags` table.
///
/// `frequency` counts how many questions currently use the tag. It is moved
/// only by `TagRepo::apply_delta`; rows reaching zero are deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TagFrequency {
    pub id: DbId,
    pub name: String,
    pub frequency: i32,
}
