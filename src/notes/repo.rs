use std::future::Future;

use sqlx::SqlitePool;
use time::OffsetDateTime;

use super::model::{Note, NoteFields, NoteId};

pub trait NoteStore: Clone + Send + Sync + 'static {
    fn insert(
        &self,
        fields: &NoteFields,
        now: OffsetDateTime,
    ) -> impl Future<Output = Result<Note, sqlx::Error>> + Send;

    fn find_by_id(
        &self,
        id: NoteId,
    ) -> impl Future<Output = Result<Option<Note>, sqlx::Error>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<Note>, sqlx::Error>> + Send;

    fn update(
        &self,
        id: NoteId,
        fields: &NoteFields,
        updated_at: OffsetDateTime,
    ) -> impl Future<Output = Result<Option<Note>, sqlx::Error>> + Send;

    fn delete(&self, id: NoteId) -> impl Future<Output = Result<bool, sqlx::Error>> + Send;

    fn exists(&self, id: NoteId) -> impl Future<Output = Result<bool, sqlx::Error>> + Send;
}

#[derive(Debug, Clone)]
pub struct SqliteNoteStore {
    db: SqlitePool,
}

impl SqliteNoteStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

impl NoteStore for SqliteNoteStore {
    async fn insert(&self, fields: &NoteFields, now: OffsetDateTime) -> Result<Note, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (title, content, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?3)
            RETURNING id, title, content, created_at, updated_at
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.content)
        .bind(now)
        .fetch_one(&self.db)
        .await
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, created_at, updated_at
            FROM notes
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
    }

    async fn find_all(&self) -> Result<Vec<Note>, sqlx::Error> {
        // stored timestamps are RFC 3339 text, which does not sort lexically
        sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, created_at, updated_at
            FROM notes
            ORDER BY julianday(created_at) DESC, id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
    }

    async fn update(
        &self,
        id: NoteId,
        fields: &NoteFields,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET title = ?2, content = ?3, updated_at = ?4
            WHERE id = ?1
            RETURNING id, title, content, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.content)
        .bind(updated_at)
        .fetch_optional(&self.db)
        .await
    }

    async fn delete(&self, id: NoteId) -> Result<bool, sqlx::Error> {
        let res = sqlx::query(
            r#"
            DELETE FROM notes
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await?;

        Ok(res.rows_affected() == 1)
    }

    async fn exists(&self, id: NoteId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM notes WHERE id = ?1)")
            .bind(id)
            .fetch_one(&self.db)
            .await
    }
}
