use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::recommendation::Recommendation;
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

/// Whether a rationale factor pushed the risk estimate down or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FactorPolarity {
    Protective,
    Adverse,
}

/// One named contribution to the final risk percentage, kept for
/// explainability surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFactor {
    pub label: String,
    pub polarity: FactorPolarity,
    /// Magnitude of the contribution in percentage points.
    pub weight: f64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionScore {
    pub section_id: String,
    pub score: f64,
    pub max_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub instrument_id: String,
    pub raw_score: f64,
    pub adjusted_score: f64,
    /// 0–100 after demographic adjustment and clamping.
    pub risk_percentage: f64,
    pub risk_category: RiskCategory,
    pub confidence_interval: ConfidenceInterval,
    /// Ordered: base mapping first, then each applied demographic delta.
    pub factors: Vec<RiskFactor>,
    pub algorithm: String,
    pub assessed_at: jiff::Timestamp,
}

/// How much of the instrument was answered. In-progress sessions are
/// scored the same way as finished ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompletionMeta {
    pub answered: u32,
    pub expected: u32,
    pub percent: f64,
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub instrument_id: String,
    pub raw_score: f64,
    pub adjusted_score: f64,
    pub max_score: f64,
    pub section_scores: Vec<SectionScore>,
    pub risk: RiskAssessment,
    pub recommendations: Vec<Recommendation>,
    pub completion: CompletionMeta,
}

impl AssessmentResult {
    /// Serialize for the storage/export layers.
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
