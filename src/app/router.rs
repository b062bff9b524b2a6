use axum::{Router, routing::get};
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::SameSite};

use crate::AppState;
use crate::app::docs;

pub fn build_router(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(1)));

    Router::new()
        .merge(crate::core::http::routes())
        .merge(crate::notes::pages::routes())
        .merge(crate::notes::http::routes())
        .route("/docs", get(docs::swagger_ui))
        .route(docs::OPENAPI_JSON_PATH, get(docs::openapi_spec))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
