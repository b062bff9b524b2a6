use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::notes::{FieldErrors, NoteError};

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

#[derive(Debug)]
pub enum ApiError {
    Validation(FieldErrors),
    Db(sqlx::Error),
    NotFound,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<NoteError> for ApiError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::NotFound(_) => ApiError::NotFound,
            NoteError::Validation(fields) => ApiError::Validation(fields),
            NoteError::Store(e) => ApiError::Db(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "VALIDATION_FAILED",
                    message: "Note is invalid".to_string(),
                    fields: Some(fields),
                }),
            )
                .into_response(),
            ApiError::Db(e) => {
                tracing::error!("db error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "INTERNAL",
                        message: "Internal server error".to_string(),
                        fields: None,
                    }),
                )
                    .into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "NOT_FOUND",
                    message: "Resource not found".to_string(),
                    fields: None,
                }),
            )
                .into_response(),
        }
    }
}
