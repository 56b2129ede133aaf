//! Follow edges - the many-to-many link between users and questions they follow

use crate::record::Record;
use crate::storage::BoardStore;
use crate::Result;
use rusqlite::Row;
use rusqlite::types::ToSql;
use serde::{Deserialize, Serialize};

/// One user following one question.
///
/// The pair is unique: saving a second follow for the same `(question_id,
/// user_id)` fails with a constraint violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionFollow {
    /// Store-assigned identifier; `None` until saved
    id: Option<i64>,
    /// Followed question
    pub question_id: i64,
    /// Following user
    pub user_id: i64,
}

impl QuestionFollow {
    /// Create an unsaved follow edge
    pub fn new(question_id: i64, user_id: i64) -> Self {
        Self {
            id: None,
            question_id,
            user_id,
        }
    }

    /// Store-assigned identifier; `None` until saved
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Fetch a follow edge by id
    pub fn find_by_id(store: &BoardStore, id: i64) -> Result<Option<QuestionFollow>> {
        store.find_by_id(id)
    }
}

impl Record for QuestionFollow {
    const TABLE: &'static str = "question_follows";
    const COLUMNS: &'static [&'static str] = &["question_id", "user_id"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            question_id: row.get(1)?,
            user_id: row.get(2)?,
        })
    }

    fn to_params(&self) -> Vec<&dyn ToSql> {
        vec![&self.question_id, &self.user_id]
    }
}
