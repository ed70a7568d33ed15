//! System API DTOs
use serde::Serialize;
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "invalid account id \"foo\": invalid digit found in string")]
    pub error: String,
    #[schema(example = 400)]
    pub status: u16,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub service: String,
}
