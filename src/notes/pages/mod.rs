use axum::{Router, routing::get};

use crate::AppState;

pub mod flash;
pub(crate) mod handlers;
pub mod views;

pub use handlers::{PageError, PageResult};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/notes/", get(handlers::note_list))
        .route(
            "/notes/create/",
            get(handlers::create_form).post(handlers::create_submit),
        )
        .route("/notes/{id}/", get(handlers::note_detail))
        .route(
            "/notes/{id}/edit/",
            get(handlers::edit_form).post(handlers::edit_submit),
        )
        .route(
            "/notes/{id}/delete/",
            get(handlers::delete_confirm).post(handlers::delete_submit),
        )
}
