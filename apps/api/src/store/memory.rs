//! In-memory [`Store`] used by service tests. Compiled only for tests.
//!
//! `insert_insight` reports a unique violation on duplicate industry names,
//! so the onboarding race tests behave exactly like the Postgres path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::assessment::AssessmentRow;
use crate::models::insight::IndustryInsight;
use crate::models::resume::ResumeRow;
use crate::models::user::User;

use super::{NewAssessment, ProfileUpdate, Store, StoreError};

#[derive(Default)]
struct Inner {
    users: HashMap<String, User>,
    insights: HashMap<String, IndustryInsight>,
    resumes: HashMap<Uuid, ResumeRow>,
    assessments: Vec<AssessmentRow>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    fail_next_update: AtomicBool,
}

impl MemoryStore {
    pub fn with_user(external_id: &str) -> Self {
        let store = Self::default();
        store.add_user(external_id);
        store
    }

    pub fn add_user(&self, external_id: &str) -> Uuid {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            external_id: external_id.to_string(),
            email: format!("{external_id}@example.com"),
            name: None,
            industry: None,
            experience: None,
            bio: None,
            skills: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        let id = user.id;
        self.lock().users.insert(external_id.to_string(), user);
        id
    }

    /// Arms a one-shot failure for the next `update_profile` call.
    pub fn fail_next_update(&self) {
        self.fail_next_update.store(true, Ordering::SeqCst);
    }

    pub fn get_user(&self, external_id: &str) -> Option<User> {
        self.lock().users.get(external_id).cloned()
    }

    pub fn set_user_industry(&self, external_id: &str, industry: Option<&str>) {
        if let Some(user) = self.lock().users.get_mut(external_id) {
            user.industry = industry.map(str::to_string);
        }
    }

    pub fn get_insight(&self, industry: &str) -> Option<IndustryInsight> {
        self.lock().insights.get(industry).cloned()
    }

    pub fn insight_count(&self) -> usize {
        self.lock().insights.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user(&self, external_id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.lock().users.get(external_id).cloned())
    }

    async fn user_industry(&self, external_id: &str) -> Result<Option<Option<String>>, StoreError> {
        Ok(self
            .lock()
            .users
            .get(external_id)
            .map(|user| user.industry.clone()))
    }

    async fn update_profile(
        &self,
        external_id: &str,
        update: &ProfileUpdate,
    ) -> Result<User, StoreError> {
        if self.fail_next_update.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Timeout(Duration::from_secs(10)));
        }

        let mut inner = self.lock();
        let user = inner
            .users
            .get_mut(external_id)
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))?;

        user.industry = Some(update.industry.clone());
        user.experience = Some(update.experience);
        user.bio = update.bio.clone();
        user.skills = update.skills.clone();
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn find_insight(&self, industry: &str) -> Result<Option<IndustryInsight>, StoreError> {
        Ok(self.lock().insights.get(industry).cloned())
    }

    async fn insert_insight(
        &self,
        insight: &IndustryInsight,
    ) -> Result<IndustryInsight, StoreError> {
        let mut inner = self.lock();
        if inner.insights.contains_key(&insight.industry) {
            return Err(StoreError::UniqueViolation(
                "industry_insights_pkey".to_string(),
            ));
        }
        inner
            .insights
            .insert(insight.industry.clone(), insight.clone());
        Ok(insight.clone())
    }

    async fn upsert_resume(&self, user_id: Uuid, content: &str) -> Result<ResumeRow, StoreError> {
        let mut inner = self.lock();
        let now = Utc::now();
        let row = inner
            .resumes
            .entry(user_id)
            .and_modify(|row| {
                row.content = content.to_string();
                row.updated_at = now;
            })
            .or_insert_with(|| ResumeRow {
                id: Uuid::new_v4(),
                user_id,
                content: content.to_string(),
                created_at: now,
                updated_at: now,
            });
        Ok(row.clone())
    }

    async fn find_resume(&self, user_id: Uuid) -> Result<Option<ResumeRow>, StoreError> {
        Ok(self.lock().resumes.get(&user_id).cloned())
    }

    async fn insert_assessment(
        &self,
        assessment: &NewAssessment,
    ) -> Result<AssessmentRow, StoreError> {
        let row = AssessmentRow {
            id: Uuid::new_v4(),
            user_id: assessment.user_id,
            quiz_score: assessment.quiz_score,
            questions: assessment.questions.clone(),
            category: assessment.category.clone(),
            improvement_tip: assessment.improvement_tip.clone(),
            created_at: Utc::now(),
        };
        self.lock().assessments.push(row.clone());
        Ok(row)
    }

    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<AssessmentRow>, StoreError> {
        let mut rows: Vec<AssessmentRow> = self
            .lock()
            .assessments
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.created_at);
        Ok(rows)
    }
}
