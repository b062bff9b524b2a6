use sqlx::SqlitePool;

use crate::notes::{NoteService, SqliteNoteStore};

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod notes;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub notes: NoteService<SqliteNoteStore>,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        let notes = NoteService::new(SqliteNoteStore::new(db.clone()));
        Self { db, notes }
    }
}
