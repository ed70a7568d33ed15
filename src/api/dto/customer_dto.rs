//! Customer API DTOs
use serde::Serialize;
use utoipa::ToSchema;

/// Placeholder body returned by every customer endpoint. Serializes as `{}`.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct EmptyResponse {}
