//! Store error taxonomy.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or updating Bear's database.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file does not exist at the resolved path.
    #[error("Bear database not found at {}", path.display())]
    NotFound { path: PathBuf },

    /// SQLite failed while opening, executing, committing or closing.
    #[error("{0}")]
    Access(#[from] rusqlite::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
