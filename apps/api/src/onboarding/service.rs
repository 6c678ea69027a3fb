//! Profile onboarding.
//!
//! Order of operations is load-bearing: the shared insight row is resolved
//! first (slow, fallible, outside any transaction), then the user's profile
//! fields are written in one short transaction. A failure in the profile
//! write leaves the insight row in place for the next caller.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::insights::generator::InsightGenerator;
use crate::insights::service::resolve_insight;
use crate::models::insight::IndustryInsight;
use crate::models::user::User;
use crate::store::{ProfileUpdate, Store};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Request body for profile onboarding.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    pub industry: String,
    pub experience: i32,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingOutcome {
    pub user: User,
    pub industry_insight: IndustryInsight,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStatus {
    pub is_onboarded: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Workflow
// ────────────────────────────────────────────────────────────────────────────

pub async fn submit_onboarding(
    store: &dyn Store,
    generator: &dyn InsightGenerator,
    external_id: &str,
    request: OnboardingRequest,
) -> Result<OnboardingOutcome, AppError> {
    validate(&request)?;

    // The identity must map to a provisioned user before any side effect.
    store
        .find_user(external_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let industry_insight = resolve_insight(store, generator, &request.industry).await?;

    let update = ProfileUpdate {
        industry: request.industry,
        experience: request.experience,
        bio: request.bio,
        skills: request.skills,
    };
    let user = store.update_profile(external_id, &update).await?;

    info!("User {} onboarded into '{}'", user.id, update.industry);

    Ok(OnboardingOutcome {
        user,
        industry_insight,
    })
}

/// A user counts as onboarded once their industry is set and non-empty.
pub async fn onboarding_status(
    store: &dyn Store,
    external_id: &str,
) -> Result<OnboardingStatus, AppError> {
    let industry = store
        .user_industry(external_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(OnboardingStatus {
        is_onboarded: industry.is_some_and(|industry| !industry.is_empty()),
    })
}

fn validate(request: &OnboardingRequest) -> Result<(), AppError> {
    if request.industry.trim().is_empty() {
        return Err(AppError::Validation("industry cannot be empty".to_string()));
    }
    if request.experience < 0 {
        return Err(AppError::Validation(
            "experience must be a non-negative number of years".to_string(),
        ));
    }
    Ok(())
}
