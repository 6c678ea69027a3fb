//! Axum route handlers for the Insights API.

use axum::{extract::State, Json};

use crate::auth::AuthedUser;
use crate::errors::AppError;
use crate::insights::service::get_user_insight;
use crate::models::insight::IndustryInsight;
use crate::state::AppState;

/// GET /api/v1/insights
///
/// Returns the insight row for the calling user's industry, generating and
/// storing it on first access.
pub async fn handle_get_insights(
    State(state): State<AppState>,
    user: AuthedUser,
) -> Result<Json<IndustryInsight>, AppError> {
    let insight = get_user_insight(
        state.store.as_ref(),
        state.insight_generator.as_ref(),
        &user.external_id,
    )
    .await?;

    Ok(Json(insight))
}
