use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub mod dto;
pub mod handlers;
pub mod prompts;
pub mod repo;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/suggest", post(handlers::suggest))
        .route("/ai/history", get(handlers::history))
}
