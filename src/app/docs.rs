use axum::{Json, response::Html};
use utoipa::OpenApi;

use crate::app::openapi::ApiDoc;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Sticky Notes API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({{
      url: '{OPENAPI_JSON_PATH}',
      dom_id: '#swagger-ui',
      deepLinking: true,
      docExpansion: 'list',
    }});
  </script>
</body>
</html>
"#
    ))
}

pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
