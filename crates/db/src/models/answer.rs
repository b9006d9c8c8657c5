//! Answer entity model and DTOs.

use qanda_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `answers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    pub question_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub votes: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new answer. The author comes from the explicit actor
/// parameter on `AnswerRepo::create`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnswer {
    pub question_id: DbId,
    pub content: String,
}
