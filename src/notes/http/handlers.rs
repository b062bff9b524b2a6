use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{AppState, error::ApiResult, notes::NoteId};

use super::dto::{DeletedNoteDto, NoteDto, NoteListDto, NoteRequest};

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = NoteRequest,
    responses(
        (status = 201, description = "Note created", body = NoteDto),
        (status = 400, description = "Invalid note fields", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn create_note(
    State(state): State<AppState>,
    Json(request): Json<NoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteDto>)> {
    let note = state.notes.create_note(&request.into()).await?;

    Ok((StatusCode::CREATED, Json(note.into())))
}

#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "All notes, newest first", body = NoteListDto),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn list_notes(State(state): State<AppState>) -> ApiResult<(StatusCode, Json<NoteListDto>)> {
    let list = state.notes.list_notes().await?;

    Ok((
        StatusCode::OK,
        Json(NoteListDto {
            notes: list.notes.into_iter().map(NoteDto::from).collect(),
            total: list.total,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "Note", body = NoteDto),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn get_note(
    State(state): State<AppState>,
    Path(note_id): Path<NoteId>,
) -> ApiResult<(StatusCode, Json<NoteDto>)> {
    let note = state.notes.get_note(note_id).await?;

    Ok((StatusCode::OK, Json(note.into())))
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note id")
    ),
    request_body = NoteRequest,
    responses(
        (status = 200, description = "Note updated", body = NoteDto),
        (status = 400, description = "Invalid note fields", body = crate::error::ErrorBody),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn update_note(
    State(state): State<AppState>,
    Path(note_id): Path<NoteId>,
    Json(request): Json<NoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteDto>)> {
    let note = state.notes.update_note(note_id, &request.into()).await?;

    Ok((StatusCode::OK, Json(note.into())))
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "Note deleted", body = DeletedNoteDto),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<NoteId>,
) -> ApiResult<(StatusCode, Json<DeletedNoteDto>)> {
    let deleted = state.notes.delete_note(note_id).await?;

    Ok((StatusCode::OK, Json(deleted.into())))
}
