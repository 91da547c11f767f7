//! Short-lived, single-statement access to the database file.

use super::transaction::Transaction;
use super::{StoreError, StoreResult};
use rusqlite::{Connection, OpenFlags, Params, Row};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Maps one result row to a typed record, reading columns by name.
pub trait FromRow: Sized {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Runs one parameterized statement per call against a database file.
///
/// Every call opens its own connection and closes it before returning,
/// on success and failure alike. Nothing is shared between calls.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    path: PathBuf,
}

impl QueryExecutor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the database file this executor connects to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ===========================================
    // Reads
    // ===========================================

    /// Runs a query and maps every row.
    pub fn fetch_all<T: FromRow>(&self, sql: &str, params: impl Params) -> StoreResult<Vec<T>> {
        self.with_connection(read_only_flags(), |conn| {
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt
                .query_map(params, T::from_row)?
                .collect::<rusqlite::Result<Vec<T>>>()?;
            Ok(rows)
        })
        .inspect(|rows| debug!(path = %self.path.display(), rows = rows.len(), "query returned"))
    }

    /// Runs a query and maps the first row, if any.
    pub fn fetch_first<T: FromRow>(
        &self,
        sql: &str,
        params: impl Params,
    ) -> StoreResult<Option<T>> {
        self.with_connection(read_only_flags(), |conn| {
            let mut stmt = conn.prepare(sql)?;
            let mut rows = stmt.query(params)?;
            let first = match rows.next()? {
                Some(row) => Some(T::from_row(row)?),
                None => None,
            };
            Ok(first)
        })
        .inspect(|row| debug!(path = %self.path.display(), found = row.is_some(), "lookup returned"))
    }

    // ===========================================
    // Writes
    // ===========================================

    /// Runs a mutating statement inside a transaction.
    ///
    /// The transaction is committed only when `commit_when` accepts the
    /// affected row count; otherwise it is rolled back without a commit.
    pub fn execute_if(
        &self,
        sql: &str,
        params: impl Params,
        commit_when: impl FnOnce(usize) -> bool,
    ) -> StoreResult<usize> {
        self.with_connection(read_write_flags(), |conn| {
            let tx = Transaction::begin(conn)?;
            let affected = tx.execute(sql, params)?;
            if commit_when(affected) {
                tx.commit()?;
            } else {
                tx.rollback()?;
            }
            Ok(affected)
        })
        .inspect(|affected| debug!(path = %self.path.display(), rows = affected, "statement applied"))
    }

    // ===========================================
    // Connection Scope
    // ===========================================

    fn with_connection<T>(
        &self,
        flags: OpenFlags,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> StoreResult<T> {
        let conn = Connection::open_with_flags(&self.path, flags).map_err(|e| self.fail(e))?;
        let result = f(&conn);
        // close() consumes the connection, so it runs whether or not `f` failed.
        let closed = conn.close().map_err(|(_, e)| e);
        let value = result.map_err(|e| self.fail(e))?;
        closed.map_err(|e| self.fail(e))?;
        Ok(value)
    }

    fn fail(&self, err: rusqlite::Error) -> StoreError {
        warn!(path = %self.path.display(), error = %err, "database access failed");
        StoreError::Access(err)
    }
}

fn read_only_flags() -> OpenFlags {
    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
}

fn read_write_flags() -> OpenFlags {
    OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
}
