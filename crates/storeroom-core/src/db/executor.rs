//! The statement execution capability shared by connections and
//! transactions.

use rusqlite::{Connection, ToSql, Transaction};

/// Anything able to run a parameterized write and report what it did.
///
/// Implemented by [`Connection`] for standalone writes and by
/// [`Transaction`] for writes grouped under [`super::Database::execute`].
pub trait Executor {
    /// Runs one statement and returns the number of rows it changed.
    fn exec(&self, sql: &str, params: &[&dyn ToSql]) -> rusqlite::Result<usize>;

    /// Rowid of the most recent successful insert on this connection.
    fn last_insert_rowid(&self) -> i64;
}

impl Executor for Connection {
    fn exec(&self, sql: &str, params: &[&dyn ToSql]) -> rusqlite::Result<usize> {
        Connection::execute(self, sql, params)
    }

    fn last_insert_rowid(&self) -> i64 {
        Connection::last_insert_rowid(self)
    }
}

impl Executor for Transaction<'_> {
    fn exec(&self, sql: &str, params: &[&dyn ToSql]) -> rusqlite::Result<usize> {
        Connection::execute(self, sql, params)
    }

    fn last_insert_rowid(&self) -> i64 {
        Connection::last_insert_rowid(self)
    }
}
