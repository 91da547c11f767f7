//! Text rendering for operation results.

use crate::domain::{NoteBody, NoteHeadline, PREVIEW_LINES};
use crate::store::StoreError;

pub const DATABASE_MISSING: &str =
    "Error: Bear database not found. Make sure Bear is installed and you're on macOS.";

pub const NO_NOTES: &str = "No notes found.";

/// One `title (Updated: timestamp)` line per note.
pub(crate) fn headlines(notes: &[NoteHeadline]) -> String {
    notes
        .iter()
        .map(|n| format!("{} (Updated: {})", n.title, n.modified))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn no_notes_with_tag(tag: &str) -> String {
    format!("No notes found with tag '{tag}'")
}

/// Title, last update and a short content preview on labelled lines.
pub(crate) fn summary(title: &str, note: &NoteBody) -> String {
    format!(
        "Note: {}\nLast Updated: {}\n\nContent Preview:\n{}",
        title,
        note.modified,
        note.preview(PREVIEW_LINES).join("\n")
    )
}

pub(crate) fn no_note_titled(title: &str) -> String {
    format!("No note found with title '{title}'")
}

pub(crate) fn deleted(title: &str) -> String {
    format!("Successfully deleted note: {title}")
}

pub(crate) fn not_deleted(title: &str) -> String {
    format!("No note found with title '{title}' or it was already deleted")
}

/// Store failure text for read operations.
pub(crate) fn read_failure(err: &StoreError) -> String {
    match err {
        StoreError::NotFound { .. } => DATABASE_MISSING.to_string(),
        StoreError::Access(e) => format!("Error accessing Bear database: {e}"),
    }
}

/// Store failure text for the delete operation.
pub(crate) fn delete_failure(err: &StoreError) -> String {
    match err {
        StoreError::NotFound { .. } => DATABASE_MISSING.to_string(),
        StoreError::Access(e) => format!("Error deleting note: {e}"),
    }
}
