//! Axum route handlers for the Resume API.

use axum::{extract::State, Json};

use crate::auth::AuthedUser;
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::resume::service::{self, ImproveRequest, ImprovedEntry, SaveResumeRequest};
use crate::state::AppState;

/// PUT /api/v1/resume
///
/// Creates or replaces the calling user's resume.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    user: AuthedUser,
    Json(request): Json<SaveResumeRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = service::save_resume(state.store.as_ref(), &user.external_id, &request.content)
        .await?;

    Ok(Json(resume))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    user: AuthedUser,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = service::get_resume(state.store.as_ref(), &user.external_id).await?;

    Ok(Json(resume))
}

/// POST /api/v1/resume/improve
///
/// Rewrites one entry description with the LLM, tuned to the user's industry.
pub async fn handle_improve_entry(
    State(state): State<AppState>,
    user: AuthedUser,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<ImprovedEntry>, AppError> {
    let improved =
        service::improve_entry(state.store.as_ref(), &state.llm, &user.external_id, request)
            .await?;

    Ok(Json(improved))
}
