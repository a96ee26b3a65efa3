use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(handlers::list_jobs).post(handlers::create_job))
        .route("/jobs/:id", delete(handlers::delete_job))
}
