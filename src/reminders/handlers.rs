use axum::extract::State;
use time::OffsetDateTime;
use tracing::instrument;

use crate::auth::extractors::OperatorAuth;
use crate::error::AppError;
use crate::reminders::service;
use crate::state::AppState;

/// GET /reminders/send: operator-triggered batch dispatch for jobs whose
/// deadline is today (UTC). No same-day dedup: calling twice re-sends.
#[instrument(skip_all)]
pub async fn send_reminders(
    State(state): State<AppState>,
    _operator: OperatorAuth,
) -> Result<&'static str, AppError> {
    let today = OffsetDateTime::now_utc().date();
    service::dispatch(&state.db, state.mailer.as_ref(), today).await?;
    Ok("Reminders sent")
}
