//! Domain logic for the Q&A application.
//!
//! This crate has no storage dependencies so the rules can be exercised by
//! both the repository layer and any future CLI or worker tooling.

pub mod error;
pub mod question;
pub mod tags;
pub mod types;
