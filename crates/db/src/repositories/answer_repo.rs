//! Repository for the `answers` table.
//!
//! Answer creation and removal keep the parent question's denormalized
//! `answers` counter in sync, in the same transaction as the row change.

use qanda_core::error::CoreError;
use qanda_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::error::DbResult;
use crate::models::answer::{Answer, CreateAnswer};
use crate::repositories::question_repo::QuestionRepo;

/// Column list for `answers` queries.
const COLUMNS: &str = "id, question_id, user_id, content, votes, created_at, updated_at";

/// Provides CRUD operations for answers.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Post an answer authored by `author_id` and increment the parent
    /// question's answer counter.
    pub async fn create(pool: &PgPool, input: &CreateAnswer, author_id: DbId) -> DbResult<Answer> {
        if input.content.trim().is_empty() {
            return Err(CoreError::validation("content", "Content must not be empty").into());
        }

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO answers (question_id, user_id, content) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let answer = sqlx::query_as::<_, Answer>(&query)
            .bind(input.question_id)
            .bind(author_id)
            .bind(&input.content)
            .fetch_one(&mut *tx)
            .await?;

        QuestionRepo::increment_answers_inner(&mut *tx, input.question_id).await?;

        tx.commit().await?;

        tracing::info!(
            answer_id = answer.id,
            question_id = answer.question_id,
            author_id,
            "answer created"
        );
        Ok(answer)
    }

    /// Find an answer by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List answers for a question, oldest first.
    pub async fn list_for_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM answers \
             WHERE question_id = $1 \
             ORDER BY created_at"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// Count answers for a question (from the rows, not the denormalized
    /// counter).
    pub async fn count_for_question(pool: &PgPool, question_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM answers WHERE question_id = $1")
            .bind(question_id)
            .fetch_one(pool)
            .await
    }

    /// Remove an answer and decrement the parent question's counter.
    /// Returns `false` if no answer with the given ID exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let mut tx = pool.begin().await?;

        let question_id = sqlx::query_scalar::<_, DbId>(
            "DELETE FROM answers WHERE id = $1 RETURNING question_id",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(question_id) = question_id else {
            return Ok(false);
        };

        QuestionRepo::decrement_answers_inner(&mut *tx, question_id).await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Remove every answer for a question. Returns the number of rows
    /// removed. Does not touch the question's counter; the caller is
    /// deleting the question itself.
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
        let result = sqlx::query("DELETE FROM answers WHERE question_id = $1")
            .bind(question_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}
