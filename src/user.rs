//! User records - the people asking, answering, following and liking

use crate::record::Record;
use crate::storage::BoardStore;
use crate::{Error, Question, Reply, Result};
use rusqlite::Row;
use rusqlite::types::ToSql;
use serde::{Deserialize, Serialize};

/// A board member.
///
/// Owns zero or more authored questions and replies, and participates in
/// follow/like edges as the subject user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier; `None` until saved
    id: Option<i64>,
    /// First name
    pub fname: String,
    /// Last name
    pub lname: String,
}

impl User {
    /// Create an unsaved user
    pub fn new(fname: impl Into<String>, lname: impl Into<String>) -> Self {
        Self {
            id: None,
            fname: fname.into(),
            lname: lname.into(),
        }
    }

    /// Store-assigned identifier; `None` until saved
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Fetch a user by id
    pub fn find_by_id(store: &BoardStore, id: i64) -> Result<Option<User>> {
        store.find_by_id(id)
    }

    /// Find users matching an exact first and last name
    pub fn find_by_name(store: &BoardStore, fname: &str, lname: &str) -> Result<Vec<User>> {
        store.find_users_by_name(fname, lname)
    }

    /// Questions this user has asked
    pub fn authored_questions(&self, store: &BoardStore) -> Result<Vec<Question>> {
        store.find_questions_by_author(self.require_id()?)
    }

    /// Replies this user has written
    pub fn authored_replies(&self, store: &BoardStore) -> Result<Vec<Reply>> {
        store.find_replies_by_author(self.require_id()?)
    }

    /// Questions this user follows
    pub fn followed_questions(&self, store: &BoardStore) -> Result<Vec<Question>> {
        store.questions_followed_by_user(self.require_id()?)
    }

    /// Questions this user has liked
    pub fn liked_questions(&self, store: &BoardStore) -> Result<Vec<Question>> {
        store.questions_liked_by_user(self.require_id()?)
    }

    /// Likes received across this user's questions, divided by the number of
    /// distinct authored questions with at least one like.
    ///
    /// `Ok(None)` when no authored question has been liked - the ratio is
    /// undefined rather than zero.
    pub fn average_karma(&self, store: &BoardStore) -> Result<Option<f64>> {
        store.average_karma_for_user(self.require_id()?)
    }

    fn require_id(&self) -> Result<i64> {
        self.id.ok_or(Error::Unsaved(Self::TABLE))
    }
}

impl Record for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["fname", "lname"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            fname: row.get(1)?,
            lname: row.get(2)?,
        })
    }

    fn to_params(&self) -> Vec<&dyn ToSql> {
        vec![&self.fname, &self.lname]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new("Ada", "Lovelace");
        assert_eq!(user.id(), None);
        assert_eq!(user.fname, "Ada");
        assert_eq!(user.lname, "Lovelace");
    }

    #[test]
    fn test_declared_columns() {
        assert_eq!(User::TABLE, "users");
        assert_eq!(User::COLUMNS, &["fname", "lname"]);
        assert_eq!(User::new("a", "b").to_params().len(), User::COLUMNS.len());
    }

    #[test]
    fn test_navigation_requires_id() {
        let store = BoardStore::open_in_memory().unwrap();
        let user = User::new("No", "Id");
        assert!(matches!(
            user.authored_questions(&store),
            Err(Error::Unsaved("users"))
        ));
    }
}
