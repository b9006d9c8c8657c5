//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods named `*_inner`
//! take a `&mut PgConnection` so they can run inside a caller's
//! transaction (the question delete cascade, answer counter updates).

pub mod answer_repo;
pub mod favorite_repo;
pub mod question_repo;
pub mod tag_repo;
pub mod user_repo;
pub mod vote_repo;

pub use answer_repo::AnswerRepo;
pub use favorite_repo::FavoriteRepo;
pub use question_repo::QuestionRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;
