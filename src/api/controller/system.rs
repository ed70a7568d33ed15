//! System controller: liveness

use axum::extract::State;
use axum::Json;

use crate::api::dto::system_dto::HealthResponse;
use crate::app_state::AppState;

#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "system",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn healthcheck(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: state.service_name.to_string(),
    })
}
