//! Account routes (e.g., /, /accounts/*)

use axum::{routing::get, Router};

use crate::api::controller::account;
use crate::app_state::AppState;

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::hello))
        .route("/accounts/{id}", get(account::show_account))
        .route("/accounts/", get(account::show_account_without_id))
}
