use axum::{extract::State, Json};
use tracing::{debug, instrument};

use crate::auth::extractors::AuthUser;
use crate::error::AppError;
use crate::state::AppState;
use crate::suggestions::dto::{SuggestRequest, SuggestResponse};
use crate::suggestions::repo::AiLog;
use crate::suggestions::service;

#[instrument(skip(state, payload))]
pub async fn suggest(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    Json(payload): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    let suggestion = service::suggest(
        &state.db,
        state.completions.as_ref(),
        &owner,
        &payload.resume,
        &payload.job,
    )
    .await?;

    Ok(Json(SuggestResponse { suggestion }))
}

#[instrument(skip(state))]
pub async fn history(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
) -> Result<Json<Vec<AiLog>>, AppError> {
    let entries = AiLog::list_owned(&state.db, &owner).await?;
    debug!(%owner, count = entries.len(), "suggestion history listed");
    Ok(Json(entries))
}
