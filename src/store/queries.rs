//! The statements run against Bear's schema and their row mappings.

use super::{FromRow, QueryExecutor, StoreResult};
use crate::domain::{CoreDataTimestamp, NoteBody, NoteHeadline};
use rusqlite::Row;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};

// ===========================================
// Statements
// ===========================================

/// Live notes, most recently modified first. Order among equal timestamps is undefined.
const RECENT_NOTES: &str = "SELECT ZTITLE, ZMODIFICATIONDATE
     FROM ZSFNOTE
     WHERE ZTRASHED = 0
     ORDER BY ZMODIFICATIONDATE DESC
     LIMIT ?1";

/// Live notes carrying a tag. `EXISTS` yields each note once however many junction rows match.
const NOTES_WITH_TAG: &str = "SELECT n.ZTITLE, n.ZMODIFICATIONDATE
     FROM ZSFNOTE n
     WHERE n.ZTRASHED = 0
       AND EXISTS (
           SELECT 1
           FROM Z_5TAGS nt
           JOIN ZSFNOTETAG t ON nt.Z_13TAGS = t.Z_PK
           WHERE nt.Z_5NOTES = n.Z_PK
             AND t.ZTITLE = ?1
       )
     ORDER BY n.ZMODIFICATIONDATE DESC";

const NOTE_BY_TITLE: &str = "SELECT ZTITLE, ZTEXT, ZMODIFICATIONDATE
     FROM ZSFNOTE
     WHERE ZTITLE = ?1
       AND ZTRASHED = 0";

const TRASH_NOTE: &str = "UPDATE ZSFNOTE
     SET ZTRASHED = 1, ZMODIFICATIONDATE = ?1
     WHERE ZTITLE = ?2
       AND ZTRASHED = 0";

// ===========================================
// Queries
// ===========================================

impl QueryExecutor {
    /// Returns up to `limit` live notes, newest first.
    pub fn recent_notes(&self, limit: u32) -> StoreResult<Vec<NoteHeadline>> {
        self.fetch_all(RECENT_NOTES, [i64::from(limit)])
    }

    /// Returns every live note tagged exactly `tag`, newest first.
    pub fn notes_with_tag(&self, tag: &str) -> StoreResult<Vec<NoteHeadline>> {
        self.fetch_all(NOTES_WITH_TAG, [tag])
    }

    /// Returns the first live note titled `title` in the store's retrieval order.
    pub fn note_by_title(&self, title: &str) -> StoreResult<Option<NoteBody>> {
        self.fetch_first(NOTE_BY_TITLE, [title])
    }

    /// Marks live notes titled `title` as trashed, stamping `at` as their
    /// modification time. Commits only if at least one row changed.
    pub fn trash_note(&self, title: &str, at: CoreDataTimestamp) -> StoreResult<usize> {
        self.execute_if(TRASH_NOTE, rusqlite::params![at.raw(), title], |n| n > 0)
    }
}

// ===========================================
// Row Mappings
// ===========================================

impl FromSql for CoreDataTimestamp {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = f64::column_result(value)?;
        CoreDataTimestamp::from_raw(raw).ok_or(FromSqlError::OutOfRange(raw as i64))
    }
}

impl FromRow for NoteHeadline {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            title: row.get::<_, Option<String>>("ZTITLE")?.unwrap_or_default(),
            modified: row.get("ZMODIFICATIONDATE")?,
        })
    }
}

impl FromRow for NoteBody {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            title: row.get::<_, Option<String>>("ZTITLE")?.unwrap_or_default(),
            text: row.get::<_, Option<String>>("ZTEXT")?.unwrap_or_default(),
            modified: row.get("ZMODIFICATIONDATE")?,
        })
    }
}
