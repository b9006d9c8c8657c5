//! Question entity model and DTOs.

use qanda_core::question::QuestionStatus;
use qanda_core::tags;
use qanda_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `questions` table.
///
/// `tags` is always in normalized form (trimmed, lowercased, deduplicated,
/// comma-delimited); the repository normalizes on every write. The `answers`
/// counter is denormalized and only moved through the explicit
/// increment/decrement operations, never by direct assignment.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    /// URL-safe slug derived from `title` at creation; never recomputed.
    pub alias: String,
    pub content: String,
    pub tags: String,
    pub answers: i32,
    pub views: i32,
    pub votes: i32,
    pub status: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Question {
    pub fn status(&self) -> QuestionStatus {
        QuestionStatus::from_i16(self.status)
    }

    pub fn is_draft(&self) -> bool {
        self.status() == QuestionStatus::Draft
    }

    /// Ownership check: is `user_id` the author of this question?
    pub fn is_author(&self, user_id: DbId) -> bool {
        self.user_id == user_id
    }

    /// The tag set as an ordered list of names, decoded from the stored
    /// delimited encoding.
    pub fn tags_list(&self) -> Vec<String> {
        tags::string_to_list(&self.tags)
    }
}

/// DTO for creating a new question.
///
/// Deliberately has no `alias` or `status` field: the alias is always derived
/// from the title and new questions are always published, regardless of
/// caller input. The author comes from the explicit actor parameter on
/// `QuestionRepo::create`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    pub title: String,
    pub content: String,
    /// Raw delimited tag string; normalized before storage.
    pub tags: String,
}

/// DTO for updating an existing question. Only non-`None` fields are applied;
/// `alias` and `status` are not updatable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuestion {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn question(status: i16, tags: &str) -> Question {
        Question {
            id: 1,
            user_id: 42,
            title: "Hello World".into(),
            alias: "hello-world".into(),
            content: "body".into(),
            tags: tags.into(),
            answers: 0,
            views: 0,
            votes: 0,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn draft_check() {
        assert!(question(0, "rust").is_draft());
        assert!(!question(1, "rust").is_draft());
    }

    #[test]
    fn author_check() {
        let q = question(1, "rust");
        assert!(q.is_author(42));
        assert!(!q.is_author(7));
    }

    #[test]
    fn tags_list_decodes_stored_string() {
        assert_eq!(question(1, "php,yii").tags_list(), vec!["php", "yii"]);
    }
}
