//! Resume storage and AI-assisted editing.
//!
//! Each user has at most one resume; saving replaces it in place.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::resume::ResumeRow;
use crate::resume::prompts::{IMPROVE_PROMPT_TEMPLATE, IMPROVE_SYSTEM};
use crate::store::Store;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct SaveResumeRequest {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImproveRequest {
    pub current: String,
    /// Which kind of entry is being improved: "experience", "education"
    /// or "project".
    #[serde(rename = "type")]
    pub entry_kind: String,
}

#[derive(Debug, Serialize)]
pub struct ImprovedEntry {
    pub content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

pub async fn save_resume(
    store: &dyn Store,
    external_id: &str,
    content: &str,
) -> Result<ResumeRow, AppError> {
    if content.trim().is_empty() {
        return Err(AppError::Validation(
            "resume content cannot be empty".to_string(),
        ));
    }

    let user = store
        .find_user(external_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(store.upsert_resume(user.id, content).await?)
}

pub async fn get_resume(store: &dyn Store, external_id: &str) -> Result<ResumeRow, AppError> {
    let user = store
        .find_user(external_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    store
        .find_resume(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("No resume saved yet".to_string()))
}

/// Rewrites one resume entry in the voice of the user's industry. Requires
/// a completed onboarding so the prompt can name that industry.
pub async fn improve_entry(
    store: &dyn Store,
    llm: &LlmClient,
    external_id: &str,
    request: ImproveRequest,
) -> Result<ImprovedEntry, AppError> {
    if request.current.trim().is_empty() {
        return Err(AppError::Validation(
            "current content cannot be empty".to_string(),
        ));
    }

    let user = store
        .find_user(external_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let industry = user
        .industry
        .filter(|industry| !industry.is_empty())
        .ok_or_else(|| AppError::Validation("User has not completed onboarding".to_string()))?;

    let prompt = build_improve_prompt(&request.entry_kind, &industry, &request.current);

    let content = llm
        .call_text(&prompt, IMPROVE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume improvement failed: {e}")))?;

    Ok(ImprovedEntry { content })
}

fn build_improve_prompt(entry_kind: &str, industry: &str, current: &str) -> String {
    IMPROVE_PROMPT_TEMPLATE
        .replace("{entry_kind}", entry_kind)
        .replace("{industry}", industry)
        .replace("{current}", current)
}
