//! Reply records - one tree of replies per question
//!
//! A reply always targets a subject question; it may additionally nest under
//! a parent reply. A reply with no parent is a thread root.

use crate::record::Record;
use crate::storage::BoardStore;
use crate::{Error, Question, Result, User};
use rusqlite::Row;
use rusqlite::types::ToSql;
use serde::{Deserialize, Serialize};

/// A reply to a question, optionally nested under another reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Store-assigned identifier; `None` until saved
    id: Option<i64>,
    /// Parent reply in the thread, `None` for a thread root
    pub parent_id: Option<i64>,
    /// Full reply text
    pub body: String,
    /// Identifier of the authoring user
    pub author_id: i64,
    /// Identifier of the question this reply belongs to
    pub subject_id: i64,
}

impl Reply {
    /// Create an unsaved thread-root reply
    pub fn new(body: impl Into<String>, author_id: i64, subject_id: i64) -> Self {
        Self {
            id: None,
            parent_id: None,
            body: body.into(),
            author_id,
            subject_id,
        }
    }

    /// Nest this reply under a parent reply
    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Store-assigned identifier; `None` until saved
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Fetch a reply by id
    pub fn find_by_id(store: &BoardStore, id: i64) -> Result<Option<Reply>> {
        store.find_by_id(id)
    }

    /// Replies written by the given user
    pub fn find_by_author(store: &BoardStore, author_id: i64) -> Result<Vec<Reply>> {
        store.find_replies_by_author(author_id)
    }

    /// Replies to the given question, in store order
    pub fn find_by_question(store: &BoardStore, question_id: i64) -> Result<Vec<Reply>> {
        store.find_replies_by_question(question_id)
    }

    /// Direct children of the given reply
    pub fn find_by_parent(store: &BoardStore, parent_id: i64) -> Result<Vec<Reply>> {
        store.find_replies_by_parent(parent_id)
    }

    /// The authoring user, `None` if the author row is gone
    pub fn author(&self, store: &BoardStore) -> Result<Option<User>> {
        store.find_by_id(self.author_id)
    }

    /// The question this reply belongs to, `None` if its row is gone
    pub fn question(&self, store: &BoardStore) -> Result<Option<Question>> {
        store.find_by_id(self.subject_id)
    }

    /// The parent reply; `None` for a thread root or a missing parent row
    pub fn parent_reply(&self, store: &BoardStore) -> Result<Option<Reply>> {
        match self.parent_id {
            Some(parent_id) => store.find_by_id(parent_id),
            None => Ok(None),
        }
    }

    /// Replies nested directly under this one
    pub fn child_replies(&self, store: &BoardStore) -> Result<Vec<Reply>> {
        let id = self.id.ok_or(Error::Unsaved(Self::TABLE))?;
        store.find_replies_by_parent(id)
    }
}

impl Record for Reply {
    const TABLE: &'static str = "replies";
    const COLUMNS: &'static [&'static str] = &["parent_id", "body", "author_id", "subject_id"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            parent_id: row.get(1)?,
            body: row.get(2)?,
            author_id: row.get(3)?,
            subject_id: row.get(4)?,
        })
    }

    fn to_params(&self) -> Vec<&dyn ToSql> {
        vec![&self.parent_id, &self.body, &self.author_id, &self.subject_id]
    }
}
