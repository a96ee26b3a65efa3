use axum::{
    extract::{FromRef, State},
    Json,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::auth::{
    dto::{LoginRequest, RegisterRequest, TokenResponse},
    jwt::JwtKeys,
    password::{hash_password, verify_password},
    repo::User,
};
use crate::error::AppError;
use crate::state::AppState;

/// Emails are compared after trimming and lowercasing; the normalized form
/// is what gets stored, embedded in tokens, and used for ownership scoping.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<&'static str, AppError> {
    payload.email = normalize_email(&payload.email);

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AppError::Validation("Invalid email".into()));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(AppError::Validation("Password too short".into()));
    }

    let hash = hash_password(&payload.password)?;

    let user = User::create(&state.db, &payload.email, &hash)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "email already registered");
            AppError::DuplicateUser
        })?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok("Registered")
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.email = normalize_email(&payload.email);

    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            AppError::InvalidCredentials
        })?;

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(email = %payload.email, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user.email)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_email("  A@X.Com "), "a@x.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }

    #[test]
    fn email_shape_validation() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("spaces in@x.com"));
    }

    #[test]
    fn token_response_serialization() {
        let response = TokenResponse {
            token: "abc.def.ghi".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"token":"abc.def.ghi"}"#);
    }
}
