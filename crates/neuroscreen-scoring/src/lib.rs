//! neuroscreen-scoring
//!
//! The scoring and risk-assessment engine: scores questionnaire responses
//! against the instrument catalog, aggregates them into section and
//! instrument scores, maps scores to risk with demographic adjustment and
//! confidence bounds, and generates prioritized recommendations.
//!
//! The engine is a pure, synchronous computation over caller-supplied
//! immutable inputs. The only time dependency is the reference date/instant
//! injected through [`ScoringContext`], so identical inputs always produce
//! identical results.

pub mod aggregate;
pub mod composite;
pub mod error;
pub mod recommend;
pub mod risk;
pub mod scorer;
pub mod strategies;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use neuroscreen_core::models::context::ScoringContext;
use neuroscreen_core::models::response::Response;
use neuroscreen_core::models::result::{AssessmentResult, CompletionMeta};
use neuroscreen_core::models::warning::ScoringWarning;
use neuroscreen_instruments::InstrumentCatalog;

pub use composite::{combine, CompositeRisk, COMPOSITE_FALLBACK_WEIGHT};
pub use error::ScoringError;
pub use recommend::{EmergencyTrigger, RecommendationCatalog};

/// A scoring outcome plus everything the caller should surface: data-quality
/// warnings and any emergency triggers that fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredAssessment {
    pub result: AssessmentResult,
    pub warnings: Vec<ScoringWarning>,
    pub emergencies: Vec<EmergencyTrigger>,
}

/// The engine. Holds the read-only catalogs; carries no per-invocation
/// state, so one instance can serve concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    instruments: InstrumentCatalog,
    recommendations: RecommendationCatalog,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            instruments: InstrumentCatalog::new(),
            recommendations: RecommendationCatalog::new(),
        }
    }

    /// Build from explicitly constructed catalogs (tests inject these).
    pub fn with_catalogs(
        instruments: InstrumentCatalog,
        recommendations: RecommendationCatalog,
    ) -> Self {
        Self {
            instruments,
            recommendations,
        }
    }

    pub fn instruments(&self) -> &InstrumentCatalog {
        &self.instruments
    }

    /// Score one instrument's responses. An unknown instrument id is an
    /// error; data-quality issues within the responses are warnings on the
    /// returned value, never silent.
    pub fn score(
        &self,
        instrument_id: &str,
        responses: &[Response],
        ctx: &ScoringContext,
    ) -> Result<ScoredAssessment, ScoringError> {
        let def = self.instruments.definition(instrument_id)?;
        let mut warnings = Vec::new();

        let aggregated = aggregate::aggregate(def, responses, ctx, &mut warnings);
        debug!(
            instrument = %def.id,
            raw = aggregated.raw_score,
            adjusted = aggregated.adjusted_score,
            "aggregated responses"
        );

        let risk = risk::calculate_risk(
            def,
            aggregated.raw_score,
            aggregated.adjusted_score,
            ctx,
            aggregated.answered,
        )?;

        let (recommendations, emergencies) = recommend::generate(
            &self.recommendations,
            def,
            aggregated.raw_score,
            &risk,
            responses,
            &ctx.profile,
            aggregated.answered,
        );

        let expected = def.questions.len() as u32;
        let completion = CompletionMeta {
            answered: aggregated.answered,
            expected,
            percent: if expected == 0 {
                0.0
            } else {
                f64::from(aggregated.answered) / f64::from(expected) * 100.0
            },
            complete: aggregated.answered == expected,
        };

        Ok(ScoredAssessment {
            result: AssessmentResult {
                instrument_id: def.id.clone(),
                raw_score: aggregated.raw_score,
                adjusted_score: aggregated.adjusted_score,
                max_score: def.scoring.max_score,
                section_scores: aggregated.section_scores,
                risk,
                recommendations,
                completion,
            },
            warnings,
            emergencies,
        })
    }

    /// Combine several completed results into one overall risk summary.
    pub fn combine(&self, results: &[AssessmentResult]) -> CompositeRisk {
        composite::combine(results)
    }
}
