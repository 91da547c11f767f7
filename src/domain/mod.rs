//! Core types: Core Data timestamps and note records

mod note;
pub mod timestamp;

pub use note::{NoteBody, NoteHeadline, PREVIEW_LINES};
pub use timestamp::{CORE_DATA_EPOCH_OFFSET, CoreDataTimestamp};
