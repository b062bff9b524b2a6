use serde::Deserialize;
use time::OffsetDateTime;

pub type NoteId = i64;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    pub fn from_note(note: &Note) -> Self {
        Self::new(note.title.clone(), note.content.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteList {
    pub notes: Vec<Note>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedNote {
    pub id: NoteId,
    pub title: String,
}
