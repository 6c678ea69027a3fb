//! Axum route handlers for the Onboarding API.

use axum::{extract::State, Json};

use crate::auth::AuthedUser;
use crate::errors::AppError;
use crate::onboarding::service::{self, OnboardingOutcome, OnboardingRequest, OnboardingStatus};
use crate::state::AppState;

/// POST /api/v1/onboarding
///
/// Sets the user's profile fields and attaches them to the shared insight
/// row for their industry, creating that row on first onboarding.
pub async fn handle_submit_onboarding(
    State(state): State<AppState>,
    user: AuthedUser,
    Json(request): Json<OnboardingRequest>,
) -> Result<Json<OnboardingOutcome>, AppError> {
    let outcome = service::submit_onboarding(
        state.store.as_ref(),
        state.insight_generator.as_ref(),
        &user.external_id,
        request,
    )
    .await?;

    Ok(Json(outcome))
}

/// GET /api/v1/onboarding/status
///
/// Reports whether the calling user has completed onboarding. Used by the
/// client to gate access to the dashboard.
pub async fn handle_onboarding_status(
    State(state): State<AppState>,
    user: AuthedUser,
) -> Result<Json<OnboardingStatus>, AppError> {
    let status = service::onboarding_status(state.store.as_ref(), &user.external_id).await?;

    Ok(Json(status))
}
