use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Append-only audit row for one suggestion call. Never mutated or deleted;
/// identical inputs get a fresh row each time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AiLog {
    pub id: Uuid,
    pub email: String,
    pub resume: String,
    pub job_description: String,
    pub suggestion: String,
    pub created_at: OffsetDateTime,
}

impl AiLog {
    pub async fn create(
        db: &PgPool,
        owner: &str,
        resume: &str,
        job_description: &str,
        suggestion: &str,
    ) -> Result<AiLog, sqlx::Error> {
        sqlx::query_as::<_, AiLog>(
            r#"
            INSERT INTO ai_logs (email, resume, job_description, suggestion)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, resume, job_description, suggestion, created_at
            "#,
        )
        .bind(owner)
        .bind(resume)
        .bind(job_description)
        .bind(suggestion)
        .fetch_one(db)
        .await
    }

    /// All log entries owned by `owner`, newest first.
    pub async fn list_owned(db: &PgPool, owner: &str) -> Result<Vec<AiLog>, sqlx::Error> {
        sqlx::query_as::<_, AiLog>(
            r#"
            SELECT id, email, resume, job_description, suggestion, created_at
            FROM ai_logs
            WHERE email = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner)
        .fetch_all(db)
        .await
    }
}
