use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::auth::extractors::AuthUser;
use crate::error::AppError;
use crate::jobs::dto::{CreateJobRequest, JobSearch};
use crate::jobs::repo::Job;
use crate::state::AppState;

#[instrument(skip(state, payload))]
pub async fn create_job(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    Json(payload): Json<CreateJobRequest>,
) -> Result<&'static str, AppError> {
    let job = Job::create(
        &state.db,
        &owner,
        &payload.title,
        &payload.company,
        &payload.description,
        payload.deadline,
    )
    .await?;

    info!(job_id = %job.id, %owner, title = %job.title, "job added");
    Ok("Job added")
}

#[instrument(skip(state))]
pub async fn list_jobs(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    Query(params): Query<JobSearch>,
) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = Job::list_owned(&state.db, &owner, &params.search).await?;
    debug!(%owner, count = jobs.len(), "jobs listed");
    Ok(Json(jobs))
}

#[instrument(skip(state))]
pub async fn delete_job(
    State(state): State<AppState>,
    AuthUser(owner): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<&'static str, AppError> {
    let deleted = Job::delete_owned(&state.db, &owner, id).await?;
    if deleted == 0 {
        debug!(%owner, %id, "delete matched no owned job");
    } else {
        info!(%owner, %id, "job deleted");
    }
    Ok("Job deleted")
}
