//! RAII-based transaction support for SQLite.

use rusqlite::{Connection, Params};

/// A database transaction with RAII-based automatic rollback.
///
/// The transaction will automatically rollback when dropped unless
/// `commit()` or `rollback()` is called explicitly.
pub(crate) struct Transaction<'a> {
    conn: &'a Connection,
    finished: bool,
}

impl<'a> Transaction<'a> {
    /// Issues `BEGIN` on the connection.
    pub(crate) fn begin(conn: &'a Connection) -> rusqlite::Result<Self> {
        conn.execute_batch("BEGIN")?;
        Ok(Self {
            conn,
            finished: false,
        })
    }

    /// Executes a SQL statement within the transaction, returning the affected row count.
    pub(crate) fn execute(&self, sql: &str, params: impl Params) -> rusqlite::Result<usize> {
        self.conn.execute(sql, params)
    }

    /// Commits the transaction.
    pub(crate) fn commit(mut self) -> rusqlite::Result<()> {
        self.finished = true;
        self.conn.execute_batch("COMMIT")
    }

    /// Rolls back the transaction explicitly.
    pub(crate) fn rollback(mut self) -> rusqlite::Result<()> {
        self.finished = true;
        self.conn.execute_batch("ROLLBACK")
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished {
            // Attempt rollback, but ignore errors since we're in drop
            let _ = self.conn.execute_batch("ROLLBACK");
        }
    }
}
