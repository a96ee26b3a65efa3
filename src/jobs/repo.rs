use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Job posting, owned by the email that created it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub email: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub deadline: Date,
    pub created_at: OffsetDateTime,
}

/// Turns a raw search term into an ILIKE pattern. LIKE metacharacters in the
/// term are escaped so "contains" stays literal; the empty term matches all.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

impl Job {
    pub async fn create(
        db: &PgPool,
        owner: &str,
        title: &str,
        company: &str,
        description: &str,
        deadline: Date,
    ) -> Result<Job, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (email, title, company, description, deadline)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, title, company, description, deadline, created_at
            "#,
        )
        .bind(owner)
        .bind(title)
        .bind(company)
        .bind(description)
        .bind(deadline)
        .fetch_one(db)
        .await
    }

    /// All jobs owned by `owner` whose title, company or description contains
    /// the term case-insensitively, newest first. Ownership lives in the same
    /// statement as the filter.
    pub async fn list_owned(
        db: &PgPool,
        owner: &str,
        search: &str,
    ) -> Result<Vec<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            r#"
            SELECT id, email, title, company, description, deadline, created_at
            FROM jobs
            WHERE email = $1
              AND (title ILIKE $2 OR company ILIKE $2 OR description ILIKE $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner)
        .bind(like_pattern(search))
        .fetch_all(db)
        .await
    }

    /// Deletes the job matching both id and owner. Zero rows affected is a
    /// no-op, not an error.
    pub async fn delete_owned(db: &PgPool, owner: &str, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM jobs
            WHERE id = $1 AND email = $2
            "#,
        )
        .bind(id)
        .bind(owner)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    /// Jobs across all owners whose deadline is exactly `date`.
    pub async fn due_on(db: &PgPool, date: Date) -> Result<Vec<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            r#"
            SELECT id, email, title, company, description, deadline, created_at
            FROM jobs
            WHERE deadline = $1
            "#,
        )
        .bind(date)
        .fetch_all(db)
        .await
    }
}
