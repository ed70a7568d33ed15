//! Documentation viewer: serves the OpenAPI document built at startup and
//! a Swagger UI page that renders it.

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use utoipa::openapi::OpenApi;

use crate::app_state::AppState;

pub const DOC_JSON_PATH: &str = "/swagger/doc.json";

const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Swagger UI</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/swagger/doc.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

pub async fn doc_json(State(state): State<AppState>) -> Json<OpenApi> {
    Json(state.api_doc.as_ref().clone())
}

pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}
