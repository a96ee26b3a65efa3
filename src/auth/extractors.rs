use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::auth::jwt::JwtKeys;
use crate::error::AppError;
use crate::state::AppState;

/// Extracts and validates the bearer token, yielding the owner email.
/// Every job and suggestion handler takes this as its first guard.
pub struct AuthUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::InvalidToken)?;

        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            AppError::InvalidToken
        })?;

        Ok(AuthUser(claims.sub))
    }
}

/// Guard for the reminder-dispatch trigger: batch side effects touching every
/// owner require the dedicated operator secret, not a user session.
pub struct OperatorAuth;

#[async_trait]
impl FromRequestParts<AppState> for OperatorAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::InvalidToken)?;

        if token != state.config.operator_token {
            warn!("reminder trigger rejected: operator token mismatch");
            return Err(AppError::InvalidToken);
        }

        Ok(OperatorAuth)
    }
}
