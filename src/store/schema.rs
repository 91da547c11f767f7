//! The part of Bear's Core Data schema this crate depends on.
//!
//! Bear owns and migrates its own database; nothing here is ever run
//! against it. [`create_schema`] builds stand-in databases with the same
//! tables and column names so the queries can be exercised anywhere.
//!
//! # Tables
//! - `ZSFNOTE` - notes (`ZTITLE`, `ZTEXT`, `ZMODIFICATIONDATE`, `ZTRASHED`, ...)
//! - `ZSFNOTETAG` - tags (`ZTITLE`, `ZMODIFICATIONDATE`)
//! - `Z_5TAGS` - many-to-many junction (`Z_5NOTES` -> note, `Z_13TAGS` -> tag)

use rusqlite::Connection;

/// Creates the notes, tags and junction tables. Idempotent.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS ZSFNOTE (
            Z_PK INTEGER PRIMARY KEY,
            ZARCHIVED INTEGER NOT NULL DEFAULT 0,
            ZENCRYPTED INTEGER NOT NULL DEFAULT 0,
            ZPINNED INTEGER NOT NULL DEFAULT 0,
            ZTRASHED INTEGER NOT NULL DEFAULT 0,
            ZCREATIONDATE TIMESTAMP,
            ZMODIFICATIONDATE TIMESTAMP,
            ZTITLE VARCHAR,
            ZTEXT VARCHAR
        );

        CREATE TABLE IF NOT EXISTS ZSFNOTETAG (
            Z_PK INTEGER PRIMARY KEY,
            ZMODIFICATIONDATE TIMESTAMP,
            ZTITLE VARCHAR
        );

        CREATE TABLE IF NOT EXISTS Z_5TAGS (
            Z_5NOTES INTEGER NOT NULL,
            Z_13TAGS INTEGER NOT NULL,
            PRIMARY KEY (Z_5NOTES, Z_13TAGS)
        );

        CREATE INDEX IF NOT EXISTS Z_5TAGS_Z_13TAGS_INDEX ON Z_5TAGS (Z_13TAGS, Z_5NOTES);",
    )
}
