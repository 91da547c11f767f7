//! The four note operations exposed to hosts.
//!
//! Each operation checks that the database exists, runs a single query
//! through [`QueryExecutor`], and renders the outcome as text. Operations
//! never fail: store errors and misses are part of the returned text.

mod render;


use crate::domain::CoreDataTimestamp;
use crate::store::{self, QueryExecutor, StoreError, StoreResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use render::{DATABASE_MISSING, NO_NOTES};

/// Note operations bound to one database path.
#[derive(Debug, Clone)]
pub struct NoteOps {
    executor: QueryExecutor,
}

impl NoteOps {
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            executor: QueryExecutor::new(database),
        }
    }

    /// Operations against the database at its conventional location.
    pub fn located() -> Self {
        Self::new(store::locate())
    }

    pub fn database_path(&self) -> &Path {
        self.executor.path()
    }

    // ===========================================
    // List Recent
    // ===========================================

    /// Lists up to `count` live notes, most recently modified first.
    ///
    /// Notes sharing a modification time come back in no particular order.
    pub fn list_recent(&self, count: u32) -> String {
        debug!(count, "listing recent notes");
        match self.guarded(|exec| exec.recent_notes(count)) {
            Ok(notes) if notes.is_empty() => NO_NOTES.to_string(),
            Ok(notes) => render::headlines(&notes),
            Err(err) => render::read_failure(&err),
        }
    }

    // ===========================================
    // Filter by Tag
    // ===========================================

    /// Lists every live note tagged exactly `tag` (case-sensitive), newest first.
    pub fn notes_by_tag(&self, tag: &str) -> String {
        debug!(tag, "listing notes by tag");
        match self.guarded(|exec| exec.notes_with_tag(tag)) {
            Ok(notes) if notes.is_empty() => render::no_notes_with_tag(tag),
            Ok(notes) => render::headlines(&notes),
            Err(err) => render::read_failure(&err),
        }
    }

    // ===========================================
    // Get Summary
    // ===========================================

    /// Shows the title, last update and first five lines of a live note.
    ///
    /// Titles are not unique in Bear; when several live notes share one,
    /// whichever the store returns first is shown.
    pub fn note_summary(&self, title: &str) -> String {
        debug!(title, "fetching note summary");
        match self.guarded(|exec| exec.note_by_title(title)) {
            Ok(Some(note)) => render::summary(title, &note),
            Ok(None) => render::no_note_titled(title),
            Err(err) => render::read_failure(&err),
        }
    }

    // ===========================================
    // Soft Delete
    // ===========================================

    /// Moves live notes titled `title` to the trash.
    ///
    /// Repeating the call leaves the note trashed but reports a miss, since
    /// no live note matches any more.
    pub fn delete_note(&self, title: &str) -> String {
        let now = CoreDataTimestamp::now();
        match self.guarded(|exec| exec.trash_note(title, now)) {
            Ok(0) => {
                debug!(title, "no live note to trash");
                render::not_deleted(title)
            }
            Ok(rows) => {
                info!(title, rows, "trashed note");
                render::deleted(title)
            }
            Err(err) => render::delete_failure(&err),
        }
    }

    fn guarded<T>(&self, f: impl FnOnce(&QueryExecutor) -> StoreResult<T>) -> StoreResult<T> {
        let path = self.executor.path();
        if !store::exists(path) {
            debug!(path = %path.display(), "database not found");
            return Err(StoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        f(&self.executor)
    }
}
