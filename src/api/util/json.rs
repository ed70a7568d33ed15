use axum::Json;

use crate::errors::AppError;

/// Map a domain `Result<T, E>` into `Json<R>`, converting the error into `AppError`.
pub fn to_json<T, R, E>(result: Result<T, E>) -> Result<Json<R>, AppError>
where
    R: serde::Serialize + From<T>,
    E: Into<AppError>,
{
    result.map(|value| Json(R::from(value))).map_err(Into::into)
}
