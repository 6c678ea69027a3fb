//! Persistence layer.
//!
//! Services talk to a narrow [`Store`] trait rather than to sqlx directly.
//! The production implementation is [`postgres::PgStore`]; tests use an
//! in-memory double so the onboarding race can be driven deterministically.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::models::assessment::AssessmentRow;
use crate::models::insight::IndustryInsight;
use crate::models::resume::ResumeRow;
use crate::models::user::User;

pub mod postgres;

#[cfg(test)]
pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A row with the same unique key already exists. The insight
    /// find-or-create matches on this to absorb insert races.
    #[error("Unique constraint violation on {0}")]
    UniqueViolation(String),

    #[error("Transaction exceeded {0:?}")]
    Timeout(Duration),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Profile fields written by the onboarding workflow in a single-row update.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub industry: String,
    pub experience: i32,
    pub bio: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub user_id: Uuid,
    pub quiz_score: f64,
    pub questions: Value,
    pub category: String,
    pub improvement_tip: Option<String>,
}

#[async_trait]
pub trait Store: Send + Sync {
    /// Looks up a user by the auth provider's stable external id.
    async fn find_user(&self, external_id: &str) -> Result<Option<User>, StoreError>;

    /// Fetches only the industry column for the onboarding-status check.
    /// Outer `None` means no such user; inner `None` means not onboarded.
    async fn user_industry(&self, external_id: &str) -> Result<Option<Option<String>>, StoreError>;

    /// Applies profile fields to one user row inside a short transaction.
    async fn update_profile(
        &self,
        external_id: &str,
        update: &ProfileUpdate,
    ) -> Result<User, StoreError>;

    /// Unique-key lookup of the shared insight row for an industry.
    async fn find_insight(&self, industry: &str) -> Result<Option<IndustryInsight>, StoreError>;

    /// Inserts a new insight row. A concurrent insert for the same industry
    /// surfaces as [`StoreError::UniqueViolation`].
    async fn insert_insight(
        &self,
        insight: &IndustryInsight,
    ) -> Result<IndustryInsight, StoreError>;

    /// Creates or replaces the user's single resume.
    async fn upsert_resume(&self, user_id: Uuid, content: &str) -> Result<ResumeRow, StoreError>;

    async fn find_resume(&self, user_id: Uuid) -> Result<Option<ResumeRow>, StoreError>;

    async fn insert_assessment(
        &self,
        assessment: &NewAssessment,
    ) -> Result<AssessmentRow, StoreError>;

    /// All assessments for a user, oldest first.
    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<AssessmentRow>, StoreError>;
}
