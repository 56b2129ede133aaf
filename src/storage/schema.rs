//! Database schema definitions
//!
//! Foreign keys are declared here and enforced by the store's
//! `PRAGMA foreign_keys = ON`; the layer itself never validates references.

/// SQL to create the users table
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    fname TEXT NOT NULL,
    lname TEXT NOT NULL
)
"#;

/// SQL to create the questions table
pub const CREATE_QUESTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    author_id INTEGER NOT NULL REFERENCES users(id)
)
"#;

/// SQL to create the replies table
/// `parent_id` is NULL for a thread root
pub const CREATE_REPLIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS replies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    parent_id INTEGER REFERENCES replies(id),
    body TEXT NOT NULL,
    author_id INTEGER NOT NULL REFERENCES users(id),
    subject_id INTEGER NOT NULL REFERENCES questions(id)
)
"#;

/// SQL to create the question_follows table
pub const CREATE_QUESTION_FOLLOWS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS question_follows (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question_id INTEGER NOT NULL REFERENCES questions(id),
    user_id INTEGER NOT NULL REFERENCES users(id),
    UNIQUE(question_id, user_id)
)
"#;

/// SQL to create the question_likes table
pub const CREATE_QUESTION_LIKES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS question_likes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question_id INTEGER NOT NULL REFERENCES questions(id),
    user_id INTEGER NOT NULL REFERENCES users(id),
    UNIQUE(question_id, user_id)
)
"#;

/// SQL to create indexes on the foreign-key columns
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_questions_author ON questions(author_id)",
    "CREATE INDEX IF NOT EXISTS idx_replies_subject ON replies(subject_id)",
    "CREATE INDEX IF NOT EXISTS idx_replies_author ON replies(author_id)",
    "CREATE INDEX IF NOT EXISTS idx_replies_parent ON replies(parent_id)",
    "CREATE INDEX IF NOT EXISTS idx_follows_question ON question_follows(question_id)",
    "CREATE INDEX IF NOT EXISTS idx_follows_user ON question_follows(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_likes_question ON question_likes(question_id)",
    "CREATE INDEX IF NOT EXISTS idx_likes_user ON question_likes(user_id)",
];

/// All schema creation statements, dependency order
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![
        CREATE_USERS_TABLE,
        CREATE_QUESTIONS_TABLE,
        CREATE_REPLIES_TABLE,
        CREATE_QUESTION_FOLLOWS_TABLE,
        CREATE_QUESTION_LIKES_TABLE,
    ];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
