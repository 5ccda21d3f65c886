//! Axum route handlers for the Ranking API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::ranking::models::{RankResponse, ResumeUpload};
use crate::ranking::ranker::rank_resumes;
use crate::state::AppState;

pub const MISSING_INPUT_MESSAGE: &str =
    "Job description and at least one resume must be provided.";

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUMES_FIELD: &str = "resumes";

/// POST /api/rank_resumes/
///
/// multipart/form-data: `job_description` (text) and one or more `resumes` files.
pub async fn handle_rank_resumes(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<RankResponse>, AppError> {
    // A body that is not multipart carries neither field.
    let mut multipart = multipart.map_err(|rejection| {
        debug!("Rejected rank request body: {rejection}");
        AppError::Validation(MISSING_INPUT_MESSAGE.to_string())
    })?;

    let mut job_description = String::new();
    let mut uploads = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            JOB_DESCRIPTION_FIELD => {
                job_description = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid job description: {e}")))?;
            }
            RESUMES_FIELD => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid resume upload: {e}")))?;
                // Browsers send an empty, unnamed part when no file was chosen.
                if filename.is_empty() && content.is_empty() {
                    continue;
                }
                uploads.push(ResumeUpload { filename, content });
            }
            _ => {}
        }
    }

    if job_description.trim().is_empty() || uploads.is_empty() {
        return Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string()));
    }

    info!("Ranking {} resumes", uploads.len());
    let candidates = rank_resumes(&job_description, uploads, state.embedder.as_ref()).await?;

    Ok(Json(RankResponse { candidates }))
}
