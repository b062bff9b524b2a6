pub mod http;
pub mod model;
pub mod pages;
pub mod repo;
pub mod service;
pub mod validation;

pub use model::{DeletedNote, Note, NoteFields, NoteId, NoteInput, NoteList};
pub use repo::{NoteStore, SqliteNoteStore};
pub use service::{NoteError, NoteResult, NoteService};
pub use validation::{FieldErrors, TITLE_MAX_CHARS, validate_note};
