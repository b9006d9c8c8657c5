//! Repository for the global `tags` frequency table.
//!
//! Frequencies track how many questions currently use each tag. The question
//! repository applies a before/after delta on every create, update, and
//! delete; this module owns the counter arithmetic.

use qanda_core::tags;
use sqlx::{PgConnection, PgPool};

use crate::models::tag::TagFrequency;

/// Column list for `tags` queries.
const COLUMNS: &str = "id, name, frequency";

/// Default page size for popular-tag listing.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for popular-tag listing.
const MAX_LIMIT: i64 = 200;

/// Maintains global per-tag usage counters.
pub struct TagRepo;

impl TagRepo {
    /// Adjust frequencies by the symmetric difference between two tag
    /// strings: +1 for each tag only in `new_tags`, -1 for each tag only in
    /// `old_tags`. Rows whose frequency reaches zero are deleted.
    ///
    /// Pass `""` as `old_tags` on question creation and as `new_tags` on
    /// question deletion.
    pub async fn apply_delta(
        pool: &PgPool,
        old_tags: &str,
        new_tags: &str,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        Self::apply_delta_inner(&mut *tx, old_tags, new_tags).await?;
        tx.commit().await
    }

    /// Transaction-friendly form of [`apply_delta`](Self::apply_delta).
    pub async fn apply_delta_inner(
        conn: &mut PgConnection,
        old_tags: &str,
        new_tags: &str,
    ) -> Result<(), sqlx::Error> {
        let delta = tags::diff(old_tags, new_tags);
        if delta.is_empty() {
            return Ok(());
        }

        for name in &delta.added {
            sqlx::query(
                "INSERT INTO tags (name, frequency) VALUES ($1, 1) \
                 ON CONFLICT (name) DO UPDATE SET frequency = tags.frequency + 1",
            )
            .bind(name)
            .execute(&mut *conn)
            .await?;
        }

        for name in &delta.removed {
            sqlx::query("UPDATE tags SET frequency = frequency - 1 WHERE name = $1")
                .bind(name)
                .execute(&mut *conn)
                .await?;
        }

        // Drop tags no question uses any more.
        sqlx::query("DELETE FROM tags WHERE frequency <= 0")
            .execute(&mut *conn)
            .await?;

        tracing::debug!(
            added = delta.added.len(),
            removed = delta.removed.len(),
            "tag frequencies adjusted"
        );
        Ok(())
    }

    /// Current usage count for a tag name, or `None` if unused.
    pub async fn frequency(pool: &PgPool, name: &str) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>("SELECT frequency FROM tags WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Find a tag row by name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<TagFrequency>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE name = $1");
        sqlx::query_as::<_, TagFrequency>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List tags by descending usage (tag cloud).
    pub async fn list_popular(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<TagFrequency>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let query = format!(
            "SELECT {COLUMNS} FROM tags \
             ORDER BY frequency DESC, name \
             LIMIT $1"
        );
        sqlx::query_as::<_, TagFrequency>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
