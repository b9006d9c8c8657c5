//! Repository for the `question_favorites` table.

use qanda_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::error::DbResult;
use crate::models::favorite::Favorite;

/// Column list for `question_favorites` queries.
const COLUMNS: &str = "id, user_id, question_id, created_at";

/// Provides favorite (bookmark) membership operations.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Has `user_id` favorited `question_id`?
    pub async fn exists(
        pool: &PgPool,
        user_id: DbId,
        question_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM question_favorites \
             WHERE user_id = $1 AND question_id = $2)",
        )
        .bind(user_id)
        .bind(question_id)
        .fetch_one(pool)
        .await
    }

    /// Flip the favorite state of `question_id` for `user_id` and return
    /// the new state (`true` = now favorited).
    ///
    /// The membership check and the write run in one transaction with the
    /// existing row locked, so two concurrent toggles by the same user
    /// serialize instead of double-inserting.
    pub async fn toggle(pool: &PgPool, user_id: DbId, question_id: DbId) -> DbResult<bool> {
        let mut tx = pool.begin().await?;

        let existing = sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM question_favorites \
             WHERE user_id = $1 AND question_id = $2 \
             FOR UPDATE",
        )
        .bind(user_id)
        .bind(question_id)
        .fetch_optional(&mut *tx)
        .await?;

        let now_favorite = match existing {
            Some(id) => {
                sqlx::query("DELETE FROM question_favorites WHERE id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                false
            }
            None => {
                sqlx::query(
                    "INSERT INTO question_favorites (user_id, question_id) \
                     VALUES ($1, $2) \
                     ON CONFLICT (user_id, question_id) DO NOTHING",
                )
                .bind(user_id)
                .bind(question_id)
                .execute(&mut *tx)
                .await?;
                true
            }
        };

        tx.commit().await?;

        tracing::debug!(user_id, question_id, now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    /// List a user's favorites, newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM question_favorites \
             WHERE user_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Remove every favorite referencing a question. Returns the number of
    /// rows removed.
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
        let result = sqlx::query("DELETE FROM question_favorites WHERE question_id = $1")
            .bind(question_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}
