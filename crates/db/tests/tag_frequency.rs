//! Integration tests for global tag-frequency bookkeeping across question
//! create, update, and delete.

use qanda_core::types::DbId;
use qanda_db::models::question::{CreateQuestion, UpdateQuestion};
use qanda_db::models::user::CreateUser;
use qanda_db::repositories::{QuestionRepo, TagRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

async fn create_question(pool: &PgPool, author: DbId, title: &str, tags: &str) -> DbId {
    QuestionRepo::create(
        pool,
        &CreateQuestion {
            title: title.to_string(),
            content: "body".to_string(),
            tags: tags.to_string(),
        },
        author,
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_increments_frequencies(pool: PgPool) {
    let author = seed_user(&pool).await;

    create_question(&pool, author, "One", "rust, sqlx").await;
    create_question(&pool, author, "Two", "rust").await;

    assert_eq!(TagRepo::frequency(&pool, "rust").await.unwrap(), Some(2));
    assert_eq!(TagRepo::frequency(&pool, "sqlx").await.unwrap(), Some(1));
    assert_eq!(TagRepo::frequency(&pool, "unknown").await.unwrap(), None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_tags_in_one_question_count_once(pool: PgPool) {
    let author = seed_user(&pool).await;

    create_question(&pool, author, "Dupes", "rust, Rust, RUST").await;

    assert_eq!(TagRepo::frequency(&pool, "rust").await.unwrap(), Some(1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_applies_symmetric_difference(pool: PgPool) {
    let author = seed_user(&pool).await;
    let id = create_question(&pool, author, "Changing", "a, b").await;

    QuestionRepo::update(
        &pool,
        id,
        &UpdateQuestion {
            tags: Some("b, c".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // "a" dropped to zero and was removed, "b" untouched, "c" added.
    assert_eq!(TagRepo::frequency(&pool, "a").await.unwrap(), None);
    assert_eq!(TagRepo::frequency(&pool, "b").await.unwrap(), Some(1));
    assert_eq!(TagRepo::frequency(&pool, "c").await.unwrap(), Some(1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_without_tag_change_leaves_frequencies(pool: PgPool) {
    let author = seed_user(&pool).await;
    let id = create_question(&pool, author, "Stable", "rust").await;

    QuestionRepo::update(
        &pool,
        id,
        &UpdateQuestion {
            content: Some("edited body".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(TagRepo::frequency(&pool, "rust").await.unwrap(), Some(1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_decrements_and_removes_zero_tags(pool: PgPool) {
    let author = seed_user(&pool).await;

    // "a" used by three questions, "b" only by the one we delete.
    let doomed = create_question(&pool, author, "Doomed", "a, b").await;
    create_question(&pool, author, "Keep One", "a").await;
    create_question(&pool, author, "Keep Two", "a").await;

    assert_eq!(TagRepo::frequency(&pool, "a").await.unwrap(), Some(3));
    assert_eq!(TagRepo::frequency(&pool, "b").await.unwrap(), Some(1));

    QuestionRepo::delete(&pool, doomed).await.unwrap();

    assert_eq!(TagRepo::frequency(&pool, "a").await.unwrap(), Some(2));
    assert_eq!(TagRepo::frequency(&pool, "b").await.unwrap(), None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_popular_orders_by_frequency(pool: PgPool) {
    let author = seed_user(&pool).await;

    create_question(&pool, author, "One", "common, rare").await;
    create_question(&pool, author, "Two", "common").await;

    let popular = TagRepo::list_popular(&pool, None).await.unwrap();
    assert_eq!(popular.len(), 2);
    assert_eq!(popular[0].name, "common");
    assert_eq!(popular[0].frequency, 2);
    assert_eq!(popular[1].name, "rare");

    let tag = TagRepo::find_by_name(&pool, "common").await.unwrap().unwrap();
    assert_eq!(tag.frequency, 2);
}
