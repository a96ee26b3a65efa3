use serde::Deserialize;
use time::Date;

/// Request body for adding a job posting.
#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    pub description: String,
    /// Calendar date, no timezone adjustment.
    pub deadline: Date,
}

/// Optional substring filter for listing jobs.
#[derive(Debug, Deserialize)]
pub struct JobSearch {
    #[serde(default)]
    pub search: String,
}
