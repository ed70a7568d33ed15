//! Customer routes (e.g., /api/v1/customers/*)

use axum::{routing::get, Router};

use crate::api::controller::customer;
use crate::app_state::AppState;

pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(customer::list_customers).post(customer::create_customer),
        )
        .route(
            "/customers/{id}",
            get(customer::get_customer)
                .patch(customer::update_customer)
                .delete(customer::delete_customer),
        )
}
