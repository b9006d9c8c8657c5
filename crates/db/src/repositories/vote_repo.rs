//! Repository for the `question_votes` table.
//!
//! Vote casting and tallying belong to the voting feature; this module only
//! provides the cleanup the question delete cascade needs.

use qanda_core::types::DbId;
use sqlx::{PgConnection, PgPool};

/// Provides vote cleanup operations.
pub struct VoteRepo;

impl VoteRepo {
    /// Remove every vote referencing a question. Returns the number of rows
    /// removed.
    pub async fn remove_all_for_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::remove_all_for_question_inner(&mut conn, question_id).await
    }

    /// Transaction-friendly form used by the question delete cascade.
    pub(crate) async fn remove_all_for_question_inner(
        conn: &mut PgConnection,
        question_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM question_votes WHERE question_id = $1")
            .bind(question_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}
