use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
};

#[derive(Serialize, ToSchema)]
pub struct DbHealth {
    status: &'static str,
    notes: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    ),
    tag = "Core"
)]
pub async fn health() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/db-health",
    responses(
        (status = 200, description = "Notes table is reachable", body = DbHealth),
        (status = 500, description = "Database or migrations unavailable", body = crate::error::ErrorBody)
    ),
    tag = "Core"
)]
pub async fn db_health(State(state): State<AppState>) -> ApiResult<Json<DbHealth>> {
    let notes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
        .fetch_one(&state.db)
        .await
        .map_err(ApiError::Db)?;

    Ok(Json(DbHealth { status: "ok", notes }))
}
