use time::OffsetDateTime;

use super::model::{DeletedNote, Note, NoteId, NoteInput, NoteList};
use super::repo::NoteStore;
use super::validation::{FieldErrors, validate_note};

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("note {0} not found")]
    NotFound(NoteId),

    #[error("invalid note: {0}")]
    Validation(FieldErrors),

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

pub type NoteResult<T> = Result<T, NoteError>;

#[derive(Debug, Clone)]
pub struct NoteService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NoteService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list_notes(&self) -> NoteResult<NoteList> {
        let notes = self.store.find_all().await?;
        let total = notes.len();
        Ok(NoteList { notes, total })
    }

    pub async fn get_note(&self, id: NoteId) -> NoteResult<Note> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(NoteError::NotFound(id))
    }

    pub async fn create_note(&self, input: &NoteInput) -> NoteResult<Note> {
        let fields = validate_note(input).map_err(|errors| {
            tracing::debug!(%errors, "note creation rejected");
            NoteError::Validation(errors)
        })?;

        let note = self.store.insert(&fields, OffsetDateTime::now_utc()).await?;
        tracing::info!(note_id = note.id, title = %note.title, "note created");
        Ok(note)
    }

    pub async fn update_note(&self, id: NoteId, input: &NoteInput) -> NoteResult<Note> {
        let current = self.get_note(id).await?;

        let fields = validate_note(input).map_err(|errors| {
            tracing::debug!(note_id = id, %errors, "note update rejected");
            NoteError::Validation(errors)
        })?;

        // keeps created_at <= updated_at if the clock steps back
        let updated_at = OffsetDateTime::now_utc().max(current.created_at);
        let note = self
            .store
            .update(id, &fields, updated_at)
            .await?
            .ok_or(NoteError::NotFound(id))?;

        tracing::info!(note_id = note.id, title = %note.title, "note updated");
        Ok(note)
    }

    pub async fn delete_note(&self, id: NoteId) -> NoteResult<DeletedNote> {
        let note = self.get_note(id).await?;

        if !self.store.delete(id).await? {
            return Err(NoteError::NotFound(id));
        }

        tracing::info!(note_id = id, title = %note.title, "note deleted");
        Ok(DeletedNote {
            id,
            title: note.title,
        })
    }
}
