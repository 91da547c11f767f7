//! Typed records for rows read from Bear's notes table.

use super::timestamp::CoreDataTimestamp;

/// Number of content lines shown in a note summary.
pub const PREVIEW_LINES: usize = 5;

/// A live note as it appears in a listing: its title and last change.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteHeadline {
    pub title: String,
    pub modified: CoreDataTimestamp,
}

impl NoteHeadline {
    pub fn new(title: impl Into<String>, modified: CoreDataTimestamp) -> Self {
        Self {
            title: title.into(),
            modified,
        }
    }
}

/// A live note with its full text, as fetched for a summary.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteBody {
    pub title: String,
    pub text: String,
    pub modified: CoreDataTimestamp,
}

impl NoteBody {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        modified: CoreDataTimestamp,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            modified,
        }
    }

    /// Returns up to `max_lines` leading lines of the text.
    ///
    /// Splits on `\n` only and never shortens an individual line.
    pub fn preview(&self, max_lines: usize) -> Vec<&str> {
        self.text.split('\n').take(max_lines).collect()
    }
}
