//! Stand-in Bear databases for unit tests.

use super::schema::create_schema;
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary database file with Bear's schema.
pub(crate) struct FixtureDb {
    _dir: TempDir,
    path: PathBuf,
}

impl FixtureDb {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("database.sqlite");
        let conn = Connection::open(&path).expect("Failed to create fixture database");
        create_schema(&conn).expect("Failed to create fixture schema");
        Self { _dir: dir, path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn conn(&self) -> Connection {
        Connection::open(&self.path).expect("Failed to open fixture database")
    }

    /// Inserts a live note and returns its primary key.
    pub(crate) fn add_note(&self, title: &str, text: &str, modified: f64) -> i64 {
        self.insert_note(title, text, modified, false)
    }

    /// Inserts an already trashed note and returns its primary key.
    pub(crate) fn add_trashed_note(&self, title: &str, text: &str, modified: f64) -> i64 {
        self.insert_note(title, text, modified, true)
    }

    fn insert_note(&self, title: &str, text: &str, modified: f64, trashed: bool) -> i64 {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO ZSFNOTE (ZTITLE, ZTEXT, ZCREATIONDATE, ZMODIFICATIONDATE, ZTRASHED)
             VALUES (?1, ?2, ?3, ?3, ?4)",
            params![title, text, modified, trashed],
        )
        .expect("Failed to insert note");
        conn.last_insert_rowid()
    }

    /// Inserts a tag and returns its primary key.
    pub(crate) fn add_tag(&self, title: &str) -> i64 {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO ZSFNOTETAG (ZTITLE, ZMODIFICATIONDATE) VALUES (?1, 0)",
            [title],
        )
        .expect("Failed to insert tag");
        conn.last_insert_rowid()
    }

    /// Links a note to a tag through the junction table.
    pub(crate) fn tag_note(&self, note: i64, tag: i64) {
        self.conn()
            .execute(
                "INSERT INTO Z_5TAGS (Z_5NOTES, Z_13TAGS) VALUES (?1, ?2)",
                [note, tag],
            )
            .expect("Failed to link note and tag");
    }

    /// Runs arbitrary SQL against the fixture.
    pub(crate) fn exec(&self, sql: &str) {
        self.conn()
            .execute_batch(sql)
            .expect("Failed to run fixture SQL");
    }

    pub(crate) fn is_trashed(&self, note: i64) -> bool {
        self.conn()
            .query_row("SELECT ZTRASHED FROM ZSFNOTE WHERE Z_PK = ?1", [note], |row| {
                row.get(0)
            })
            .expect("Failed to read ZTRASHED")
    }

    pub(crate) fn modified(&self, note: i64) -> f64 {
        self.conn()
            .query_row(
                "SELECT ZMODIFICATIONDATE FROM ZSFNOTE WHERE Z_PK = ?1",
                [note],
                |row| row.get(0),
            )
            .expect("Failed to read ZMODIFICATIONDATE")
    }
}
