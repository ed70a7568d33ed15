//! Account controller: greeting and account lookup

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::Json;

use crate::api::dto::account_dto::{AccountResponse, HelloResponse};
use crate::api::dto::system_dto::ErrorResponse;
use crate::api::util::json::to_json;
use crate::domain::account::parse_account;
use crate::errors::AppError;

#[utoipa::path(
    get,
    path = "/",
    tag = "hello",
    responses((status = 200, description = "Fixed greeting", body = HelloResponse))
)]
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse::default())
}

/// Show an account
///
/// Get an account by its integer id.
#[utoipa::path(
    get,
    path = "/accounts/{id}",
    operation_id = "get-string-by-int",
    tag = "accounts",
    params(("id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 400, description = "Id is not a valid integer", body = ErrorResponse),
    )
)]
pub async fn show_account(
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<AccountResponse>, AppError> {
    // an id that is not valid UTF-8 is just another malformed identifier
    let Path(id) = id.map_err(|rejection| AppError::InvalidIdentifier(rejection.body_text()))?;
    lookup(&id)
}

/// `GET /accounts/` carries an empty id, which never parses.
pub async fn show_account_without_id() -> Result<Json<AccountResponse>, AppError> {
    lookup("")
}

fn lookup(raw: &str) -> Result<Json<AccountResponse>, AppError> {
    to_json(parse_account(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn hello_returns_fixed_message() {
        let Json(body) = hello().await;
        assert_eq!(body.message, "Hello, World!");
    }

    #[tokio::test]
    async fn show_account_echoes_parsed_id() {
        let Json(body) = show_account(Ok(Path("42".to_string()))).await.unwrap();
        assert_eq!(body.id, 42);

        let Json(body) = show_account(Ok(Path("-3".to_string()))).await.unwrap();
        assert_eq!(body.id, -3);
    }

    #[tokio::test]
    async fn show_account_rejects_garbage_with_bad_request() {
        let err = show_account(Ok(Path("12a".to_string()))).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidIdentifier(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_id_is_bad_request() {
        let err = show_account_without_id().await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
