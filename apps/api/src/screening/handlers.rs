use axum::{
    extract::{multipart::Field, Multipart, State},
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::scoring_run::{ScoreResult, ScoringInput, ScoringRun};
use crate::pdf::{extract_text, UploadedFile};
use crate::state::AppState;

const RESUME_FILE_FIELD: &str = "resume_file";
const RESUME_TEXT_FIELD: &str = "resume_text";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// POST /api/v1/resume/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(input): Json<ScoringInput>,
) -> Result<Json<ScoreResult>, AppError> {
    Ok(Json(state.screening.score(input).await?))
}

/// POST /api/v1/resume/score-pdf
///
/// Multipart form: `resume_file` (PDF, optional), `resume_text` (optional),
/// `job_description`. Text extracted from the file replaces `resume_text`.
pub async fn handle_score_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreResult>, AppError> {
    let mut input = ScoringInput::default();
    let mut resume_file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FILE_FIELD) => resume_file = read_file_field(field).await?,
            Some(RESUME_TEXT_FIELD) => input.resume_text = read_text_field(field).await?,
            Some(JOB_DESCRIPTION_FIELD) => input.job_description = read_text_field(field).await?,
            other => warn!("Ignoring unknown multipart field {other:?}"),
        }
    }

    if let Some(file) = resume_file.as_ref() {
        input.resume_text = extract_text(Some(file)).await?;
        info!(
            "Extracted {} characters of resume text from PDF",
            input.resume_text.len()
        );
    }

    if input.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume text is required (either as text or PDF file)".to_string(),
        ));
    }

    Ok(Json(state.screening.score(input).await?))
}

/// GET /api/v1/resume/history
pub async fn handle_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScoringRun>>, AppError> {
    Ok(Json(state.screening.history().await?))
}

/// Reads a file part. A part with no filename and no bytes is a form field
/// left blank and counts as no file.
async fn read_file_field(field: Field<'_>) -> Result<Option<UploadedFile>, AppError> {
    let has_file_name = field.file_name().is_some_and(|name| !name.is_empty());
    let content_type = field.content_type().map(String::from);
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;

    if bytes.is_empty() && !has_file_name {
        return Ok(None);
    }
    Ok(Some(UploadedFile {
        content_type,
        bytes,
    }))
}

async fn read_text_field(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))
}
