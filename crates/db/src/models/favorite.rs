//! Favorite (bookmark) entity model.

use qanda_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `question_favorites` table: one user's bookmark of one
/// question. The (user_id, question_id) pair is unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub question_id: DbId,
    pub created_at: Timestamp,
}
