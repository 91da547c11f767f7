//! Isolated test environment with a stand-in Bear database.

use super::{BearCommand, TestNote};
use bearnotes::store::schema::create_schema;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary Bear database.
///
/// The directory doubles as the config home for spawned commands, so a
/// user's own config file never leaks into tests.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
    db_path: PathBuf,
}

impl TestEnv {
    /// Creates a new environment with an empty database.
    pub fn new() -> Self {
        let env = Self::without_database();
        let conn = Connection::open(&env.db_path).expect("Failed to create database");
        create_schema(&conn).expect("Failed to create schema");
        env
    }

    /// Creates a new environment whose database file does not exist.
    pub fn without_database() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        let db_path = root.join("database.sqlite");
        Self {
            _temp_dir: temp_dir,
            root,
            db_path,
        }
    }

    /// Returns the path of the database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Returns the temp directory used as config home.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn conn(&self) -> Connection {
        Connection::open(&self.db_path).expect("Failed to open database")
    }

    /// Inserts a note with its tags and returns its primary key.
    pub fn add_note(&self, note: &TestNote) -> i64 {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO ZSFNOTE (ZTITLE, ZTEXT, ZCREATIONDATE, ZMODIFICATIONDATE, ZTRASHED)
             VALUES (?1, ?2, ?3, ?3, ?4)",
            params![
                note.title(),
                note.get_text(),
                note.get_modified(),
                note.is_trashed()
            ],
        )
        .expect("Failed to insert note");
        let note_pk = conn.last_insert_rowid();

        for tag in note.tags() {
            let tag_pk = self.tag_pk(&conn, tag);
            conn.execute(
                "INSERT INTO Z_5TAGS (Z_5NOTES, Z_13TAGS) VALUES (?1, ?2)",
                [note_pk, tag_pk],
            )
            .expect("Failed to link tag");
        }
        note_pk
    }

    fn tag_pk(&self, conn: &Connection, title: &str) -> i64 {
        let existing: Option<i64> = conn
            .query_row("SELECT Z_PK FROM ZSFNOTETAG WHERE ZTITLE = ?1", [title], |row| {
                row.get(0)
            })
            .optional()
            .expect("Failed to look up tag");
        if let Some(pk) = existing {
            return pk;
        }
        conn.execute(
            "INSERT INTO ZSFNOTETAG (ZTITLE, ZMODIFICATIONDATE) VALUES (?1, 0)",
            [title],
        )
        .expect("Failed to insert tag");
        conn.last_insert_rowid()
    }

    /// Returns the trashed flag of a note by primary key.
    pub fn is_trashed(&self, note_pk: i64) -> bool {
        self.conn()
            .query_row(
                "SELECT ZTRASHED FROM ZSFNOTE WHERE Z_PK = ?1",
                [note_pk],
                |row| row.get(0),
            )
            .expect("Failed to read note")
    }

    /// Creates a BearCommand pointed at this environment's database.
    pub fn cmd(&self) -> BearCommand {
        BearCommand::new().config_home(&self.root).db(&self.db_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_database() {
        let env = TestEnv::new();
        assert!(env.db_path().exists(), "database should exist");
    }

    #[test]
    fn test_env_without_database() {
        let env = TestEnv::without_database();
        assert!(!env.db_path().exists());
        assert!(env.root().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_reuses_tags() {
        let env = TestEnv::new();
        env.add_note(&TestNote::new("A").tag("#work"));
        env.add_note(&TestNote::new("B").tag("#work"));

        let count: i64 = env
            .conn()
            .query_row("SELECT COUNT(*) FROM ZSFNOTETAG", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_env_add_note_respects_trashed() {
        let env = TestEnv::new();
        let live = env.add_note(&TestNote::new("Live"));
        let gone = env.add_note(&TestNote::new("Gone").trashed());
        assert!(!env.is_trashed(live));
        assert!(env.is_trashed(gone));
    }
}
