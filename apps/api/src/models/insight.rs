#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// One shared row per industry name. `industry` is the natural key; every
/// user onboarded into the same industry references the same row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct IndustryInsight {
    pub industry: String,
    pub growth_rate: f64,
    pub demand_level: String,
    pub market_outlook: String,
    pub salary_ranges: Value,
    pub top_skills: Vec<String>,
    pub key_trends: Vec<String>,
    pub recommended_skills: Vec<String>,
    pub last_updated: DateTime<Utc>,
    pub next_update: DateTime<Utc>,
}
