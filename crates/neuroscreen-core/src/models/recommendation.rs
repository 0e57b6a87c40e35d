use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::result::RiskCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendationCategory {
    Medical,
    Lifestyle,
    Monitoring,
    Educational,
    Immediate,
    ShortTerm,
    LongTerm,
}

/// Declared in ascending order so the derived `Ord` sorts by urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
    Emergency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub id: String,
    pub instrument_id: String,
    pub risk_level: RiskCategory,
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action_steps: Vec<String>,
    pub resources: Option<Vec<String>>,
    /// Suggested follow-up interval in days.
    pub follow_up_days: u32,
}
