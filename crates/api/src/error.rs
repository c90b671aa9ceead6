use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use cadastros_core::error::CoreError;
use cadastros_core::validation::FieldErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders as a `{ "error", "code" }` JSON body; validation
/// failures also carry `fields`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Unreadable request: malformed path id, body or query.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server-side schema validation failed.
    #[error("Validation failed for {} field(s)", .0.len())]
    InvalidFields(FieldErrors),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// `error` text of a validation failure; shown as-is by clients.
pub const INVALID_FIELDS_MESSAGE: &str = "Existem campos inválidos no registro.";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
                None,
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg, None)
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            AppError::InvalidFields(fields) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                INVALID_FIELDS_MESSAGE.to_string(),
                Some(fields),
            ),
        };

        let body = match fields {
            Some(fields) => json!({
                "error": message,
                "code": code,
                "fields": fields,
            }),
            None => json!({
                "error": message,
                "code": code,
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}
