use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted scoring request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScoringRun {
    pub id: i64,
    pub resume_text: String,
    pub job_description: String,
    pub score: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewScoringRun {
    pub resume_text: String,
    pub job_description: String,
    pub score: f64,
}

/// Input to a scoring call. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringInput {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: f64,
}
