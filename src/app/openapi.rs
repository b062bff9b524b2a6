use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sticky Notes",
        description = "JSON API over the note service used by the HTML pages"
    ),
    paths(
        crate::core::http::handlers::health,
        crate::core::http::handlers::db_health,
        crate::notes::http::handlers::list_notes,
        crate::notes::http::handlers::create_note,
        crate::notes::http::handlers::get_note,
        crate::notes::http::handlers::update_note,
        crate::notes::http::handlers::delete_note
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::core::http::DbHealth,
        crate::notes::FieldErrors,
        crate::notes::http::NoteRequest,
        crate::notes::http::NoteDto,
        crate::notes::http::NoteListDto,
        crate::notes::http::DeletedNoteDto
    )),
    tags(
        (name = "Core", description = "Service health endpoints"),
        (name = "Notes", description = "Sticky notes endpoints")
    )
)]
pub struct ApiDoc;
