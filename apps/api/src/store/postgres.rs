//! PostgreSQL implementation of the [`Store`] trait.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::assessment::AssessmentRow;
use crate::models::insight::IndustryInsight;
use crate::models::resume::ResumeRow;
use crate::models::user::User;

use super::{NewAssessment, ProfileUpdate, Store, StoreError};

pub struct PgStore {
    pool: PgPool,
    /// Bound on the profile-update transaction (10s unless configured).
    tx_timeout: Duration,
}

impl PgStore {
    pub fn new(pool: PgPool, tx_timeout: Duration) -> Self {
        Self { pool, tx_timeout }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_user(&self, external_id: &str) -> Result<Option<User>, StoreError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE external_id = $1")
                .bind(external_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn user_industry(&self, external_id: &str) -> Result<Option<Option<String>>, StoreError> {
        let industry: Option<Option<String>> =
            sqlx::query_scalar("SELECT industry FROM users WHERE external_id = $1")
                .bind(external_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(industry)
    }

    async fn update_profile(
        &self,
        external_id: &str,
        update: &ProfileUpdate,
    ) -> Result<User, StoreError> {
        // The write touches exactly one row, so the whole transaction runs
        // under a timeout. Insight resolution already happened outside it.
        let write = async {
            let mut tx = self.pool.begin().await?;

            let user = sqlx::query_as::<_, User>(
                r#"
                UPDATE users
                SET industry = $1,
                    experience = $2,
                    bio = $3,
                    skills = $4,
                    updated_at = now()
                WHERE external_id = $5
                RETURNING *
                "#,
            )
            .bind(&update.industry)
            .bind(update.experience)
            .bind(&update.bio)
            .bind(&update.skills)
            .bind(external_id)
            .fetch_one(&mut *tx)
            .await?;

            tx.commit().await?;
            Ok::<User, StoreError>(user)
        };

        match tokio::time::timeout(self.tx_timeout, write).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.tx_timeout)),
        }
    }

    async fn find_insight(&self, industry: &str) -> Result<Option<IndustryInsight>, StoreError> {
        Ok(sqlx::query_as::<_, IndustryInsight>(
            "SELECT * FROM industry_insights WHERE industry = $1",
        )
        .bind(industry)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert_insight(
        &self,
        insight: &IndustryInsight,
    ) -> Result<IndustryInsight, StoreError> {
        sqlx::query_as::<_, IndustryInsight>(
            r#"
            INSERT INTO industry_insights
                (industry, growth_rate, demand_level, market_outlook, salary_ranges,
                 top_skills, key_trends, recommended_skills, last_updated, next_update)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&insight.industry)
        .bind(insight.growth_rate)
        .bind(&insight.demand_level)
        .bind(&insight.market_outlook)
        .bind(&insight.salary_ranges)
        .bind(&insight.top_skills)
        .bind(&insight.key_trends)
        .bind(&insight.recommended_skills)
        .bind(insight.last_updated)
        .bind(insight.next_update)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)
    }

    async fn upsert_resume(&self, user_id: Uuid, content: &str) -> Result<ResumeRow, StoreError> {
        Ok(sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (user_id, content)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET content = EXCLUDED.content, updated_at = now()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn find_resume(&self, user_id: Uuid) -> Result<Option<ResumeRow>, StoreError> {
        Ok(
            sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn insert_assessment(
        &self,
        assessment: &NewAssessment,
    ) -> Result<AssessmentRow, StoreError> {
        Ok(sqlx::query_as::<_, AssessmentRow>(
            r#"
            INSERT INTO assessments (user_id, quiz_score, questions, category, improvement_tip)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(assessment.user_id)
        .bind(assessment.quiz_score)
        .bind(&assessment.questions)
        .bind(&assessment.category)
        .bind(&assessment.improvement_tip)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_assessments(&self, user_id: Uuid) -> Result<Vec<AssessmentRow>, StoreError> {
        Ok(sqlx::query_as::<_, AssessmentRow>(
            "SELECT * FROM assessments WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}

/// Maps a Postgres unique-constraint failure to the typed variant the
/// find-or-create fallback matches on. Everything else passes through.
fn map_unique_violation(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            return StoreError::UniqueViolation(constraint);
        }
    }
    StoreError::Database(err)
}
