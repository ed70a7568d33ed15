use axum::{http::Uri, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api::docs::{AccountApiDoc, CustomerApiDoc};
use crate::api::routes::{account_routes, customer_routes, docs_routes};
use crate::app_state::{build_app_state, AppState};
use crate::errors::AppError;

/// Build the router of the account service: greeting, account lookup, docs.
pub fn account_router(service_name: &str) -> Router {
    let state = build_app_state(service_name, AccountApiDoc::openapi());

    finish(
        Router::new()
            .merge(account_routes::account_routes())
            .merge(docs_routes::docs_routes()),
        state,
    )
}

/// Build the router of the customer service: health check, customer CRUD, docs.
pub fn customer_router(service_name: &str) -> Router {
    let state = build_app_state(service_name, CustomerApiDoc::openapi());

    // Customer subrouter lives under /api/v1
    let api_v1 = Router::new().merge(customer_routes::customer_routes());

    finish(
        Router::new()
            .route(
                "/healthcheck",
                axum::routing::get(crate::api::controller::system::healthcheck),
            )
            .nest("/api/v1", api_v1)
            .merge(docs_routes::docs_routes()),
        state,
    )
}

fn finish(router: Router<AppState>, state: AppState) -> Router {
    router
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        // Attach shared application state ONCE here
        .with_state(state)
}

// Handler for 404 Not Found
async fn handler_404(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
