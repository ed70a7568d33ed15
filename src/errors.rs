use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::api::dto::system_dto::ErrorResponse;
use crate::domain::account::AccountIdError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidIdentifier(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<AccountIdError> for AppError {
    fn from(err: AccountIdError) -> Self {
        AppError::InvalidIdentifier(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        // String provided by thiserror → safe JSON message
        let body = Json(ErrorResponse {
            error: self.to_string(),
            status: status.as_u16(),
        });

        (status, body).into_response()
    }
}
