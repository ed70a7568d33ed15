//! Documentation routes (/swagger/*)

use axum::{routing::get, Router};

use crate::api::controller::docs;
use crate::app_state::AppState;

pub fn docs_routes() -> Router<AppState> {
    Router::new()
        .route(docs::DOC_JSON_PATH, get(docs::doc_json))
        .route("/swagger", get(docs::swagger_ui))
        .route("/swagger/", get(docs::swagger_ui))
        .route("/swagger/{*rest}", get(docs::swagger_ui))
}
