//! Question records and the ranking aggregates owned by them

use crate::record::Record;
use crate::storage::BoardStore;
use crate::{Error, Reply, Result, User};
use rusqlite::Row;
use rusqlite::types::ToSql;
use serde::{Deserialize, Serialize};

/// A question asked on the board.
///
/// Owned by exactly one author; has zero or more replies, followers and
/// likers reached through the navigation methods below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned identifier; `None` until saved
    id: Option<i64>,
    /// Short title shown in listings
    pub title: String,
    /// Full question text
    pub body: String,
    /// Identifier of the authoring user
    pub author_id: i64,
}

impl Question {
    /// Create an unsaved question
    pub fn new(title: impl Into<String>, body: impl Into<String>, author_id: i64) -> Self {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
            author_id,
        }
    }

    /// Store-assigned identifier; `None` until saved
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Fetch a question by id
    pub fn find_by_id(store: &BoardStore, id: i64) -> Result<Option<Question>> {
        store.find_by_id(id)
    }

    /// Questions written by the given author
    pub fn find_by_author(store: &BoardStore, author_id: i64) -> Result<Vec<Question>> {
        store.find_questions_by_author(author_id)
    }

    /// The `n` questions with the most followers, most-followed first
    pub fn most_followed(store: &BoardStore, n: usize) -> Result<Vec<Question>> {
        store.most_followed_questions(n)
    }

    /// The `n` questions with the most likes, most-liked first
    pub fn most_liked(store: &BoardStore, n: usize) -> Result<Vec<Question>> {
        store.most_liked_questions(n)
    }

    /// The authoring user, `None` if the author row is gone
    pub fn author(&self, store: &BoardStore) -> Result<Option<User>> {
        store.find_by_id(self.author_id)
    }

    /// Replies to this question, in store order
    pub fn replies(&self, store: &BoardStore) -> Result<Vec<Reply>> {
        store.find_replies_by_question(self.require_id()?)
    }

    /// Users following this question
    pub fn followers(&self, store: &BoardStore) -> Result<Vec<User>> {
        store.followers_of_question(self.require_id()?)
    }

    /// Users who liked this question
    pub fn likers(&self, store: &BoardStore) -> Result<Vec<User>> {
        store.likers_of_question(self.require_id()?)
    }

    /// Number of distinct users who liked this question
    pub fn num_likes(&self, store: &BoardStore) -> Result<usize> {
        store.num_likes_for_question(self.require_id()?)
    }

    fn require_id(&self) -> Result<i64> {
        self.id.ok_or(Error::Unsaved(Self::TABLE))
    }
}

impl Record for Question {
    const TABLE: &'static str = "questions";
    const COLUMNS: &'static [&'static str] = &["title", "body", "author_id"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            title: row.get(1)?,
            body: row.get(2)?,
            author_id: row.get(3)?,
        })
    }

    fn to_params(&self) -> Vec<&dyn ToSql> {
        vec![&self.title, &self.body, &self.author_id]
    }
}
