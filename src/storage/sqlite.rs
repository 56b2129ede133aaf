//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params, params_from_iter};

use crate::Result;
use crate::question::Question;
use crate::record::{self, Record};
use crate::reply::Reply;
use crate::user::User;
use super::schema;

/// SQLite-backed store for the board.
///
/// Owns a single connection. The store is not `Sync` (the connection is
/// not), so an insert and its id read-back in [`BoardStore::save`] cannot be
/// interleaved by another writer on the same handle; share a store across
/// threads by wrapping it in a `Mutex`.
pub struct BoardStore {
    conn: Connection,
}

impl BoardStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA foreign_keys = ON;")?;
        let store = Self { conn };
        store.initialize_schema()?;
        tracing::debug!("opened board store at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        tracing::debug!("schema initialized");
        Ok(())
    }

    // ========== Record Mapper Operations ==========

    /// Fetch one record by id, `None` if no row matches
    pub fn find_by_id<R: Record>(&self, id: i64) -> Result<Option<R>> {
        let sql = record::select_by_id_sql::<R>();
        let mut stmt = self.conn.prepare_cached(&sql)?;
        stmt.query_row([id], R::from_row)
            .optional()
            .map_err(Into::into)
    }

    /// Fetch every record of a type, in store order
    pub fn find_all<R: Record>(&self) -> Result<Vec<R>> {
        let sql = record::select_all_sql::<R>();
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let records = stmt
            .query_map([], R::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// Persist a record: insert and back-fill the id when it has none,
    /// update every non-id column keyed by id otherwise.
    ///
    /// Binding order is the record's declared column order, matching the
    /// placeholder order of the generated template.
    pub fn save<R: Record>(&self, record: &mut R) -> Result<()> {
        match record.id() {
            None => {
                let sql = record::insert_sql::<R>();
                let mut stmt = self.conn.prepare_cached(&sql)?;
                stmt.execute(params_from_iter(record.to_params()))?;
                let id = self.conn.last_insert_rowid();
                record.set_id(id);
                tracing::debug!("inserted {} id={}", R::TABLE, id);
            }
            Some(id) => {
                let sql = record::update_sql::<R>();
                let mut stmt = self.conn.prepare_cached(&sql)?;
                let mut values = record.to_params();
                values.push(&id);
                stmt.execute(params_from_iter(values))?;
                tracing::debug!("updated {} id={}", R::TABLE, id);
            }
        }
        Ok(())
    }

    // ========== User Operations ==========

    /// Find users matching an exact first and last name
    pub fn find_users_by_name(&self, fname: &str, lname: &str) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, fname, lname FROM users WHERE fname = ?1 AND lname = ?2",
        )?;
        let users = stmt
            .query_map(params![fname, lname], User::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(users)
    }

    /// Likes received across a user's questions divided by the number of
    /// distinct authored questions with at least one like; `None` when no
    /// authored question has been liked (the ratio is undefined)
    pub fn average_karma_for_user(&self, user_id: i64) -> Result<Option<f64>> {
        let karma: Option<f64> = self.conn.query_row(
            "SELECT CAST(COUNT(*) AS REAL) / COUNT(DISTINCT questions.id)
             FROM questions
             JOIN question_likes ON question_likes.question_id = questions.id
             WHERE questions.author_id = ?1",
            params![user_id],
            |row| row.get(0),
        )?;
        Ok(karma)
    }

    // ========== Question Operations ==========

    /// Questions written by the given author
    pub fn find_questions_by_author(&self, author_id: i64) -> Result<Vec<Question>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, body, author_id FROM questions WHERE author_id = ?1",
        )?;
        let questions = stmt
            .query_map([author_id], Question::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(questions)
    }

    // ========== Reply Operations ==========

    /// Replies written by the given user
    pub fn find_replies_by_author(&self, author_id: i64) -> Result<Vec<Reply>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, parent_id, body, author_id, subject_id FROM replies WHERE author_id = ?1",
        )?;
        let replies = stmt
            .query_map([author_id], Reply::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(replies)
    }

    /// Replies to the given question, in store order
    pub fn find_replies_by_question(&self, question_id: i64) -> Result<Vec<Reply>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, parent_id, body, author_id, subject_id FROM replies WHERE subject_id = ?1",
        )?;
        let replies = stmt
            .query_map([question_id], Reply::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(replies)
    }

    /// Direct children of the given reply
    pub fn find_replies_by_parent(&self, parent_id: i64) -> Result<Vec<Reply>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, parent_id, body, author_id, subject_id FROM replies WHERE parent_id = ?1",
        )?;
        let replies = stmt
            .query_map([parent_id], Reply::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(replies)
    }

    // ========== Follow Operations ==========

    /// Users following the given question
    pub fn followers_of_question(&self, question_id: i64) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(
            "SELECT users.id, users.fname, users.lname
             FROM question_follows
             JOIN users ON users.id = question_follows.user_id
             WHERE question_follows.question_id = ?1",
        )?;
        let users = stmt
            .query_map([question_id], User::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(users)
    }

    /// Questions the given user follows
    pub fn questions_followed_by_user(&self, user_id: i64) -> Result<Vec<Question>> {
        let mut stmt = self.conn.prepare(
            "SELECT questions.id, questions.title, questions.body, questions.author_id
             FROM question_follows
             JOIN questions ON questions.id = question_follows.question_id
             WHERE question_follows.user_id = ?1",
        )?;
        let questions = stmt
            .query_map([user_id], Question::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(questions)
    }

    /// The `n` questions with the most followers, most-followed first;
    /// ties fall back to store order
    pub fn most_followed_questions(&self, n: usize) -> Result<Vec<Question>> {
        let mut stmt = self.conn.prepare(
            "SELECT questions.id, questions.title, questions.body, questions.author_id
             FROM question_follows
             JOIN questions ON questions.id = question_follows.question_id
             GROUP BY questions.id
             ORDER BY COUNT(question_follows.question_id) DESC
             LIMIT ?1",
        )?;
        let questions = stmt
            .query_map([n as i64], Question::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(questions)
    }

    // ========== Like Operations ==========

    /// Users who liked the given question
    pub fn likers_of_question(&self, question_id: i64) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(
            "SELECT users.id, users.fname, users.lname
             FROM question_likes
             JOIN users ON users.id = question_likes.user_id
             WHERE question_likes.question_id = ?1",
        )?;
        let users = stmt
            .query_map([question_id], User::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(users)
    }

    /// Questions the given user has liked
    pub fn questions_liked_by_user(&self, user_id: i64) -> Result<Vec<Question>> {
        let mut stmt = self.conn.prepare(
            "SELECT questions.id, questions.title, questions.body, questions.author_id
             FROM question_likes
             JOIN questions ON questions.id = question_likes.question_id
             WHERE question_likes.user_id = ?1",
        )?;
        let questions = stmt
            .query_map([user_id], Question::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(questions)
    }

    /// Number of distinct users who liked the given question
    pub fn num_likes_for_question(&self, question_id: i64) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(DISTINCT users.id)
             FROM question_likes
             JOIN users ON users.id = question_likes.user_id
             WHERE question_likes.question_id = ?1",
            params![question_id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// The `n` questions with the most likes, most-liked first;
    /// ties fall back to store order
    pub fn most_liked_questions(&self, n: usize) -> Result<Vec<Question>> {
        let mut stmt = self.conn.prepare(
            "SELECT questions.id, questions.title, questions.body, questions.author_id
             FROM question_likes
             JOIN questions ON questions.id = question_likes.question_id
             GROUP BY questions.id
             ORDER BY COUNT(question_likes.question_id) DESC
             LIMIT ?1",
        )?;
        let questions = stmt
            .query_map([n as i64], Question::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(questions)
    }
}
