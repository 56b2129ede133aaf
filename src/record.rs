//! Record mapping - declared types to table rows
//!
//! Every persisted type implements [`Record`]: a static table name, a static
//! ordered column list, and positional hydration/binding. The statement
//! templates below are pure functions of those consts - no runtime name
//! discovery, no string assembly from external input. The store runs them
//! through rusqlite's prepared-statement cache, so each template is compiled
//! once per connection.

use rusqlite::Row;
use rusqlite::types::ToSql;

/// A declared record type mapped one-to-one to a storage table.
///
/// The contract between the consts and the methods:
/// - `COLUMNS` lists the non-id columns in declaration order
/// - `to_params` yields values in exactly that order
/// - `from_row` reads rows selected as `id, <COLUMNS...>` positionally
pub trait Record: Sized {
    /// Table this record type persists to
    const TABLE: &'static str;

    /// Persisted columns excluding the identifier, in declaration order
    const COLUMNS: &'static [&'static str];

    /// Store-assigned identifier; `None` until the record is saved
    fn id(&self) -> Option<i64>;

    /// Back-fill the identifier after an insert (called by the store)
    fn set_id(&mut self, id: i64);

    /// Hydrate one row whose columns are `id` followed by `COLUMNS`
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Values for the non-id columns, in `COLUMNS` order
    fn to_params(&self) -> Vec<&dyn ToSql>;
}

/// `SELECT id, <COLUMNS> FROM <TABLE> WHERE id = ?1`
pub fn select_by_id_sql<R: Record>() -> String {
    format!(
        "SELECT id, {} FROM {} WHERE id = ?1",
        R::COLUMNS.join(", "),
        R::TABLE
    )
}

/// `SELECT id, <COLUMNS> FROM <TABLE>`
pub fn select_all_sql<R: Record>() -> String {
    format!("SELECT id, {} FROM {}", R::COLUMNS.join(", "), R::TABLE)
}

/// `INSERT INTO <TABLE> (<COLUMNS>) VALUES (?1, ..)` - one placeholder per column
pub fn insert_sql<R: Record>() -> String {
    let placeholders: Vec<String> = (1..=R::COLUMNS.len()).map(|i| format!("?{}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        R::TABLE,
        R::COLUMNS.join(", "),
        placeholders.join(", ")
    )
}

/// `UPDATE <TABLE> SET <col> = ?n, .. WHERE id = ?last`
pub fn update_sql<R: Record>() -> String {
    let assignments: Vec<String> = R::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ?{}", col, i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE id = ?{}",
        R::TABLE,
        assignments.join(", "),
        R::COLUMNS.len() + 1
    )
}
