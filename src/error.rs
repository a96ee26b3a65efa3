use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Application-level error type.
/// Implements `IntoResponse` so handlers can return `Result<T, AppError>`.
///
/// Client-visible text stays short; store and provider detail goes to the
/// log, never into the response body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("user exists")]
    DuplicateUser,

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing token")]
    MissingToken,

    #[error("invalid token")]
    InvalidToken,

    #[error("completion provider error: {0}")]
    Provider(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::DuplicateUser => (StatusCode::BAD_REQUEST, "User exists".to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidCredentials => {
                (StatusCode::FORBIDDEN, "Invalid credentials".to_string())
            }
            AppError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing token".to_string()),
            AppError::InvalidToken => (StatusCode::FORBIDDEN, "Invalid token".to_string()),
            AppError::Provider(msg) => {
                error!(error = %msg, "completion provider call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Suggestion provider unavailable".to_string(),
                )
            }
            AppError::Database(e) => {
                error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(e) => {
                error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_status_codes() {
        let cases = [
            (AppError::DuplicateUser, StatusCode::BAD_REQUEST),
            (AppError::InvalidCredentials, StatusCode::FORBIDDEN),
            (AppError::MissingToken, StatusCode::UNAUTHORIZED),
            (AppError::InvalidToken, StatusCode::FORBIDDEN),
            (AppError::Provider("boom".into()), StatusCode::BAD_GATEWAY),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
