use serde::{Deserialize, Serialize};
use ts_rs::TS;

use neuroscreen_core::models::profile::Gender;
use neuroscreen_core::models::result::RiskCategory;

/// One selectable option with the score it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LookupEntry {
    pub key: String,
    pub points: f64,
}

/// How a single response maps to points. A closed set: every variant has
/// exactly one handler in the scorer, and custom behavior is a string
/// strategy key resolved through a registry — definitions stay plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringRule {
    /// Score is the value of the option matching the answer.
    Direct,
    /// Normalized text looked up in a table. Accent-insensitive matching
    /// is declared per question, never applied implicitly.
    Lookup {
        table: Vec<LookupEntry>,
        accent_insensitive: bool,
    },
    /// Named formula over aggregated sub-answers (e.g. serial sevens).
    Calculated { formula: String },
    /// Named strategy resolved through the scorer's registry.
    Custom { strategy: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    /// Explicit section assignment. When absent, the aggregator falls back
    /// to matching the question id against section prefixes.
    pub section: Option<String>,
    pub rule: ScoringRule,
    pub options: Vec<QuestionOption>,
    /// Reference data for calculated/custom rules: expected subtraction
    /// sequence, recall word list, drawing elements, instruction steps.
    pub expected: Vec<String>,
    /// Score cap for partial-credit strategies.
    pub max_points: Option<f64>,
    /// Minimum count for threshold formulas (e.g. verbal fluency).
    pub threshold: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionSpec {
    pub id: String,
    pub max_score: f64,
    pub weight: f64,
    /// Question-id prefix used as the fallback section marker.
    pub question_prefix: Option<String>,
}

/// Declared score adjustments applied after aggregation, before clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreAdjustment {
    /// Add `delta` when years of education is at or below `max_years`.
    EducationYears { max_years: u32, delta: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Aggregation {
    /// Raw score is the plain sum of section scores.
    Sum,
    /// Raw score is the sum of section scores times section weights.
    WeightedSum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringConfig {
    pub min_score: f64,
    pub max_score: f64,
    pub aggregation: Aggregation,
    pub sections: Vec<SectionSpec>,
    pub adjustments: Vec<ScoreAdjustment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskAlgorithm {
    Threshold,
    WeightedThreshold,
    Linear,
    Custom(String),
}

impl RiskAlgorithm {
    pub fn name(&self) -> &str {
        match self {
            RiskAlgorithm::Threshold => "threshold",
            RiskAlgorithm::WeightedThreshold => "weighted_threshold",
            RiskAlgorithm::Linear => "linear",
            RiskAlgorithm::Custom(name) => name,
        }
    }
}

/// One band of the score→percentage mapping. Within a band the percentage
/// is linear between `pct_at_lo` and `pct_at_hi`; for the cognitive
/// instruments `pct_at_lo > pct_at_hi` (higher score, lower risk).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskBand {
    pub score_lo: f64,
    pub score_hi: f64,
    pub pct_at_lo: f64,
    pub pct_at_hi: f64,
    pub category: RiskCategory,
}

/// Ordered bands partitioning `[min_score, max_score]` with no gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskMapping {
    pub algorithm: RiskAlgorithm,
    pub bands: Vec<RiskBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeBandDelta {
    pub min_age: u32,
    pub max_age: u32,
    /// Percentage points added to the base risk percentage.
    pub delta: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EducationBandDelta {
    pub min_years: u32,
    pub max_years: u32,
    pub delta: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenderDelta {
    pub gender: Gender,
    pub delta: f64,
    pub label: String,
}

/// Additive percentage-point deltas layered over the base mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DemographicAdjustments {
    pub age_bands: Vec<AgeBandDelta>,
    pub education_bands: Vec<EducationBandDelta>,
    pub gender_deltas: Vec<GenderDelta>,
}

/// Cut points for re-deriving the category from the adjusted percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryCutpoints {
    /// Adjusted percentage at or below this is low risk.
    pub low_max: f64,
    /// Adjusted percentage at or below this (and above `low_max`) is moderate.
    pub moderate_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceConfig {
    /// Fixed ± width in percentage points. Narrower for well-validated
    /// scales, wider for symptom-severity screens.
    pub half_width: f64,
    /// Added to the half width when age or education fall outside the
    /// central ranges below.
    pub widen_by: f64,
    pub central_age_min: u32,
    pub central_age_max: u32,
    pub central_education_min: u32,
    pub central_education_max: u32,
}

/// Complete definition of one instrument. Built once at catalog
/// construction and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentDefinition {
    pub id: String,
    pub name: String,
    pub questions: Vec<Question>,
    pub scoring: ScoringConfig,
    pub risk: RiskMapping,
    pub demographics: DemographicAdjustments,
    pub cutpoints: CategoryCutpoints,
    pub confidence: ConfidenceConfig,
}

impl InstrumentDefinition {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Sum of section maxima under this instrument's aggregation rule.
    /// For one instrument (the Parkinson's screen) this does not equal the
    /// declared `max_score` — a known discrepancy carried from the source
    /// definitions, surfaced rather than silently corrected.
    pub fn section_sum(&self) -> f64 {
        match self.scoring.aggregation {
            Aggregation::Sum => self.scoring.sections.iter().map(|s| s.max_score).sum(),
            Aggregation::WeightedSum => self
                .scoring
                .sections
                .iter()
                .map(|s| s.max_score * s.weight)
                .sum(),
        }
    }
}
