//! Like edges - the many-to-many link between users and questions they liked

use crate::record::Record;
use crate::storage::BoardStore;
use crate::Result;
use rusqlite::Row;
use rusqlite::types::ToSql;
use serde::{Deserialize, Serialize};

/// One user's like of one question.
///
/// Same shape and uniqueness rule as [`crate::QuestionFollow`]: a user can
/// like a given question once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionLike {
    /// Store-assigned identifier; `None` until saved
    id: Option<i64>,
    /// Liked question
    pub question_id: i64,
    /// Liking user
    pub user_id: i64,
}

impl QuestionLike {
    /// Create an unsaved like edge
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

    /// Fetch a like edge by id
    pub fn find_by_id(store: &BoardStore, id: i64) -> Result<Option<QuestionLike>> {
        store.find_by_id(id)
    }
}

impl Record for QuestionLike {
    const TABLE: &'static str = "question_likes";
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_columns() {
        assert_eq!(QuestionLike::TABLE, "question_likes");
        assert_eq!(QuestionLike::COLUMNS, &["question_id", "user_id"]);
        assert_eq!(QuestionLike::new(3, 4).id(), None);
    }
}
