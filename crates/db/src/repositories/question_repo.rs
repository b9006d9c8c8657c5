//! Repository for the `questions` table.
//!
//! The original application drove slug generation, author stamping, tag
//! bookkeeping, and the delete cascade through ORM lifecycle hooks. Here
//! each of those is an explicit step inside the operation that needs it,
//! and the multi-step sequences (create, update, delete cascade) run in a
//! single transaction.

use qanda_core::question::{self, QuestionStatus};
use qanda_core::tags;
use qanda_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::error::DbResult;
use crate::models::question::{CreateQuestion, Question, UpdateQuestion};
use crate::repositories::answer_repo::AnswerRepo;
use crate::repositories::favorite_repo::FavoriteRepo;
use crate::repositories::tag_repo::TagRepo;
use crate::repositories::vote_repo::VoteRepo;

/// Column list for `questions` queries.
const COLUMNS: &str = "id, user_id, title, alias, content, tags, \
    answers, views, votes, status, created_at, updated_at";

/// Default page size for question listing.
const DEFAULT_LIMIT: i64 = 20;

/// Maximum page size for question listing.
const MAX_LIMIT: i64 = 100;

/// Provides CRUD operations and counter updates for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Create a new question authored by `author_id`.
    ///
    /// Validates required fields before any write, normalizes the tag
    /// string, derives the alias from the title, and stamps the question
    /// as published. The global tag frequencies are incremented in the
    /// same transaction as the insert.
    pub async fn create(
        pool: &PgPool,
        input: &CreateQuestion,
        author_id: DbId,
    ) -> DbResult<Question> {
        question::validate_new_question(&input.title, &input.content, &input.tags)?;
        let normalized_tags = tags::normalize(&input.tags);
        let alias = question::generate_alias(&input.title);

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO questions (user_id, title, alias, content, tags, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Question>(&query)
            .bind(author_id)
            .bind(&input.title)
            .bind(&alias)
            .bind(&input.content)
            .bind(&normalized_tags)
            .bind(QuestionStatus::Published.as_i16())
            .fetch_one(&mut *tx)
            .await?;

        // On insert the "previous" tag set is empty.
        TagRepo::apply_delta_inner(&mut *tx, "", &normalized_tags).await?;

        tx.commit().await?;

        tracing::info!(
            question_id = created.id,
            author_id,
            alias = %created.alias,
            "question created"
        );
        Ok(created)
    }

    /// Find a question by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a question by its URL alias.
    pub async fn find_by_alias(
        pool: &PgPool,
        alias: &str,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions WHERE alias = $1 ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(alias)
            .fetch_optional(pool)
            .await
    }

    /// List published questions, newest first.
    pub async fn list_published(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = offset.unwrap_or(0);
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE status = $1 \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(QuestionStatus::Published.as_i16())
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List all questions authored by a user, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE user_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a question. Only non-`None` fields in `input` are applied;
    /// the alias and status are never recomputed.
    ///
    /// If the tag string changes, it is re-normalized and the global tag
    /// frequencies are adjusted by the before/after delta, all in one
    /// transaction. Returns `None` if no question with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuestion,
    ) -> DbResult<Option<Question>> {
        if let Some(title) = &input.title {
            question::validate_title(title)?;
        }
        if let Some(content) = &input.content {
            question::validate_content(content)?;
        }
        if let Some(tags_str) = &input.tags {
            question::validate_tags(tags_str)?;
        }
        let normalized_tags = input.tags.as_deref().map(tags::normalize);

        let mut tx = pool.begin().await?;

        // Capture the previous tag string for the frequency delta.
        let Some(previous) = Self::find_by_id_for_update(&mut *tx, id).await? else {
            return Ok(None);
        };

        let query = format!(
            "UPDATE questions SET \
                 title = COALESCE($2, title), \
                 content = COALESCE($3, content), \
                 tags = COALESCE($4, tags), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&normalized_tags)
            .fetch_one(&mut *tx)
            .await?;

        TagRepo::apply_delta_inner(&mut *tx, &previous.tags, &updated.tags).await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete a question and clean up everything that references it:
    /// tag frequencies, favorites, votes, then answers, in that order,
    /// all in one transaction. Returns `false` if the question does not
    /// exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<bool> {
        let mut tx = pool.begin().await?;

        let Some(existing) = Self::find_by_id_for_update(&mut *tx, id).await? else {
            return Ok(false);
        };

        TagRepo::apply_delta_inner(&mut *tx, &existing.tags, "").await?;
        let favorites = FavoriteRepo::remove_all_for_question_inner(&mut *tx, id).await?;
        let votes = VoteRepo::remove_all_for_question_inner(&mut *tx, id).await?;
        let answers = AnswerRepo::remove_all_for_question_inner(&mut *tx, id).await?;

        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            question_id = id,
            favorites,
            votes,
            answers,
            "question deleted with cascade"
        );
        Ok(true)
    }

    /// Bump the view counter. Storage-level update, no read-modify-write.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE questions SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Bump the denormalized answers counter. Called by `AnswerRepo` when
    /// an answer is created.
    pub async fn increment_answers(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::increment_answers_inner(&mut conn, id).await
    }

    /// Decrement the answers counter, flooring at zero. Called by
    /// `AnswerRepo` when an answer is removed.
    pub async fn decrement_answers(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::decrement_answers_inner(&mut conn, id).await
    }

    pub(crate) async fn increment_answers_inner(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE questions SET answers = answers + 1 WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }

    pub(crate) async fn decrement_answers_inner(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE questions SET answers = GREATEST(answers - 1, 0) WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Fetch a question by ID inside a transaction, locking the row so
    /// concurrent tag-frequency deltas serialize against each other.
    async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }
}
