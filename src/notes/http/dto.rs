use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::notes::{DeletedNote, Note, NoteInput};

#[derive(Deserialize, ToSchema)]
pub struct NoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<NoteRequest> for NoteInput {
    fn from(req: NoteRequest) -> Self {
        NoteInput {
            title: req.title,
            content: req.content,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct NoteDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        NoteDto {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct NoteListDto {
    pub notes: Vec<NoteDto>,
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct DeletedNoteDto {
    pub id: i64,
    pub title: String,
}

impl From<DeletedNote> for DeletedNoteDto {
    fn from(deleted: DeletedNote) -> Self {
        DeletedNoteDto {
            id: deleted.id,
            title: deleted.title,
        }
    }
}
