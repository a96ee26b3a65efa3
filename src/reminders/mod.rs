use crate::state::AppState;
use axum::{routing::get, Router};

pub mod handlers;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/reminders/send", get(handlers::send_reminders))
}
