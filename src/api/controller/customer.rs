//! Customer controller
//!
//! Registered so the routing table and the API document are complete. Storage,
//! validation and the customer shape belong to a contract that is not defined
//! yet, so every endpoint answers `200 {}`.

use axum::extract::Path;
use axum::Json;
use tracing::debug;

use crate::api::dto::customer_dto::EmptyResponse;

#[utoipa::path(
    get,
    path = "/api/v1/customers",
    tag = "customers",
    responses((status = 200, description = "List customers", body = EmptyResponse))
)]
pub async fn list_customers() -> Json<EmptyResponse> {
    Json(EmptyResponse::default())
}

#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer ID")),
    responses((status = 200, description = "Get a customer", body = EmptyResponse))
)]
pub async fn get_customer(Path(id): Path<String>) -> Json<EmptyResponse> {
    debug!(customer_id = %id, "get customer");
    Json(EmptyResponse::default())
}

#[utoipa::path(
    post,
    path = "/api/v1/customers",
    tag = "customers",
    responses((status = 200, description = "Create a customer", body = EmptyResponse))
)]
pub async fn create_customer() -> Json<EmptyResponse> {
    Json(EmptyResponse::default())
}

#[utoipa::path(
    patch,
    path = "/api/v1/customers/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer ID")),
    responses((status = 200, description = "Update a customer", body = EmptyResponse))
)]
pub async fn update_customer(Path(id): Path<String>) -> Json<EmptyResponse> {
    debug!(customer_id = %id, "update customer");
    Json(EmptyResponse::default())
}

#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer ID")),
    responses((status = 200, description = "Delete a customer", body = EmptyResponse))
)]
pub async fn delete_customer(Path(id): Path<String>) -> Json<EmptyResponse> {
    debug!(customer_id = %id, "delete customer");
    Json(EmptyResponse::default())
}
