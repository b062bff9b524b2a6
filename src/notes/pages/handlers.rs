use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::{
    AppState,
    notes::{FieldErrors, NoteError, NoteId, NoteInput},
};

use super::flash;
use super::views::{self, FormAction};

#[derive(Debug)]
pub enum PageError {
    NotFound,
    Internal(NoteError),
}

impl From<NoteError> for PageError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::NotFound(_) => PageError::NotFound,
            other => PageError::Internal(other),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => {
                (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response()
            }
            PageError::Internal(e) => {
                tracing::error!("page error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::server_error_page()),
                )
                    .into_response()
            }
        }
    }
}

pub type PageResult = Result<Response, PageError>;

fn parse_id(raw: &str) -> Result<NoteId, PageError> {
    raw.parse().map_err(|_| PageError::NotFound)
}

fn note_url(id: NoteId) -> String {
    format!("/notes/{id}/")
}

pub async fn index() -> Redirect {
    Redirect::to("/notes/")
}

pub async fn note_list(State(state): State<AppState>, session: Session) -> PageResult {
    let list = state.notes.list_notes().await?;
    let message = flash::take(&session).await;
    Ok(Html(views::note_list_page(&list, message.as_deref())).into_response())
}

pub async fn note_detail(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> PageResult {
    let note = state.notes.get_note(parse_id(&id)?).await?;
    let message = flash::take(&session).await;
    Ok(Html(views::note_detail_page(&note, message.as_deref())).into_response())
}

pub async fn create_form() -> Html<String> {
    Html(views::note_form_page(
        FormAction::Create,
        &NoteInput::default(),
        &FieldErrors::default(),
    ))
}

pub async fn create_submit(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<NoteInput>,
) -> PageResult {
    match state.notes.create_note(&input).await {
        Ok(note) => {
            flash::set(&session, flash::created(&note.title)).await;
            Ok(Redirect::to(&note_url(note.id)).into_response())
        }
        Err(NoteError::Validation(errors)) => Ok(Html(views::note_form_page(
            FormAction::Create,
            &input,
            &errors,
        ))
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

pub async fn edit_form(State(state): State<AppState>, Path(id): Path<String>) -> PageResult {
    let note = state.notes.get_note(parse_id(&id)?).await?;
    Ok(Html(views::note_form_page(
        FormAction::Update(note.id),
        &NoteInput::from_note(&note),
        &FieldErrors::default(),
    ))
    .into_response())
}

pub async fn edit_submit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(input): Form<NoteInput>,
) -> PageResult {
    let id = parse_id(&id)?;
    match state.notes.update_note(id, &input).await {
        Ok(note) => {
            flash::set(&session, flash::updated(&note.title)).await;
            Ok(Redirect::to(&note_url(note.id)).into_response())
        }
        Err(NoteError::Validation(errors)) => Ok(Html(views::note_form_page(
            FormAction::Update(id),
            &input,
            &errors,
        ))
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_confirm(State(state): State<AppState>, Path(id): Path<String>) -> PageResult {
    let note = state.notes.get_note(parse_id(&id)?).await?;
    Ok(Html(views::confirm_delete_page(&note)).into_response())
}

pub async fn delete_submit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> PageResult {
    let deleted = state.notes.delete_note(parse_id(&id)?).await?;
    flash::set(&session, flash::deleted(&deleted.title)).await;
    Ok(Redirect::to("/notes/").into_response())
}
