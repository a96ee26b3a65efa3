use serde::{Deserialize, Serialize};

/// Request body for a resume-improvement suggestion.
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub resume: String,
    pub job: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestion: String,
}
