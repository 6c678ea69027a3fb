//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};

use crate::auth::AuthedUser;
use crate::errors::AppError;
use crate::interview::service::{self, QuizQuestion, QuizResultRequest};
use crate::models::assessment::AssessmentRow;
use crate::state::AppState;

/// POST /api/v1/interview/quiz
///
/// Generates a fresh 10-question technical quiz for the user's industry
/// and skills. Nothing is persisted until results are submitted.
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    user: AuthedUser,
) -> Result<Json<Vec<QuizQuestion>>, AppError> {
    let questions =
        service::generate_quiz(state.store.as_ref(), &state.llm, &user.external_id).await?;

    Ok(Json(questions))
}

/// POST /api/v1/interview/results
///
/// Grades the submitted answers, asks for an improvement tip when any were
/// wrong, and stores the assessment.
pub async fn handle_save_result(
    State(state): State<AppState>,
    user: AuthedUser,
    Json(request): Json<QuizResultRequest>,
) -> Result<Json<AssessmentRow>, AppError> {
    let assessment =
        service::save_quiz_result(state.store.as_ref(), &state.llm, &user.external_id, request)
            .await?;

    Ok(Json(assessment))
}

/// GET /api/v1/interview/assessments
pub async fn handle_list_assessments(
    State(state): State<AppState>,
    user: AuthedUser,
) -> Result<Json<Vec<AssessmentRow>>, AppError> {
    let assessments = service::list_assessments(state.store.as_ref(), &user.external_id).await?;

    Ok(Json(assessments))
}
