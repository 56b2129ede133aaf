//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - users(id, fname, lname)
//! - questions(id, title, body, author_id)
//! - replies(id, parent_id, body, author_id, subject_id)
//! - question_follows(id, question_id, user_id)
//! - question_likes(id, question_id, user_id)

pub mod schema;
pub mod sqlite;

pub use sqlite::BoardStore;
