//! # Qboard - Q&A board persistence
//!
//! SQLite-backed object-relational layer for a small forum domain.
//!
//! Qboard provides:
//! - A `Record` trait mapping declared types to table rows without per-type SQL
//! - Five record types: users, questions, replies, follow edges, like edges
//! - Relational navigation (authors, reply threads, followers, likers)
//! - Ranking and ratio aggregates (most followed/liked, per-user karma)
//! - An explicit store handle - no global connection, in-memory test doubles

pub mod config;
pub mod record;
pub mod user;
pub mod question;
pub mod reply;
pub mod follow;
pub mod like;
pub mod storage;

// Re-exports for convenient access
pub use record::Record;
pub use user::User;
pub use question::Question;
pub use reply::Reply;
pub use follow::QuestionFollow;
pub use like::QuestionLike;
pub use storage::BoardStore;

/// Result type alias for Qboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Qboard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Record in table '{0}' has no id yet (save it first)")]
    Unsaved(&'static str),

    #[error("Config already exists: {0}")]
    ConfigExists(String),
}
