//! Insight Generation — pluggable, trait-based source of industry market data.
//!
//! Default: `LlmInsightGenerator` (Gemini-backed). Tests substitute doubles
//! that count calls or hold them at a barrier to drive the onboarding race.
//!
//! `AppState` holds an `Arc<dyn InsightGenerator>`, wired at startup.

use std::fmt;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::insights::prompts::{INSIGHT_PROMPT_TEMPLATE, INSIGHT_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::insight::IndustryInsight;

/// How long a stored insight stays fresh before a background refresh is due.
const REFRESH_INTERVAL_DAYS: i64 = 7;

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across all generator backends)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketOutlook {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

impl fmt::Display for MarketOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        })
    }
}

/// One salary band for a common role within the industry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub role: String,
    pub min: f64,
    pub median: f64,
    pub max: f64,
    #[serde(default)]
    pub location: Option<String>,
}

/// Structured market-insight bundle returned by a generator backend.
///
/// Every field carries a serde default so a partial model response still
/// lands on the documented baseline (growth 0, Medium demand, Neutral
/// outlook, empty lists) instead of failing the whole onboarding call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedInsight {
    pub growth_rate: f64,
    pub demand_level: DemandLevel,
    pub market_outlook: MarketOutlook,
    pub salary_ranges: Vec<SalaryRange>,
    pub top_skills: Vec<String>,
    pub key_trends: Vec<String>,
    pub recommended_skills: Vec<String>,
}

impl GeneratedInsight {
    /// Builds the full shared row for `industry`, stamping the refresh
    /// window. `next_update` is always computed here, never taken from the
    /// generator output.
    pub fn into_row(self, industry: &str) -> IndustryInsight {
        let now = Utc::now();
        IndustryInsight {
            industry: industry.to_string(),
            growth_rate: self.growth_rate,
            demand_level: self.demand_level.to_string(),
            market_outlook: self.market_outlook.to_string(),
            salary_ranges: serde_json::to_value(&self.salary_ranges)
                .unwrap_or_else(|_| Value::Array(Vec::new())),
            top_skills: self.top_skills,
            key_trends: self.key_trends,
            recommended_skills: self.recommended_skills,
            last_updated: now,
            next_update: now + chrono::Duration::days(REFRESH_INTERVAL_DAYS),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The insight generator trait. Implement this to swap backends without
/// touching the onboarding workflow or its callers.
///
/// Carried in `AppState` as `Arc<dyn InsightGenerator>`.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    async fn generate(&self, industry: &str) -> Result<GeneratedInsight, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmInsightGenerator — production implementation
// ────────────────────────────────────────────────────────────────────────────

/// Gemini-backed generator. One call per industry; the structured JSON
/// response is deserialized straight into [`GeneratedInsight`].
pub struct LlmInsightGenerator {
    llm: LlmClient,
}

impl LlmInsightGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl InsightGenerator for LlmInsightGenerator {
    async fn generate(&self, industry: &str) -> Result<GeneratedInsight, AppError> {
        let prompt = INSIGHT_PROMPT_TEMPLATE.replace("{industry}", industry);

        self.llm
            .call_json::<GeneratedInsight>(&prompt, INSIGHT_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Insight generation for '{industry}' failed: {e}")))
    }
}
