//! Cross-instrument composite risk: a weighted mean of the individual risk
//! percentages, normalized by the weights actually present.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use neuroscreen_core::models::result::{AssessmentResult, RiskCategory};

/// Weight applied to instruments absent from the fixed table. Inherited,
/// undocumented behavior from the source definitions; kept explicit rather
/// than reinterpreted.
pub const COMPOSITE_FALLBACK_WEIGHT: f64 = 0.10;

const COMPOSITE_LOW_MAX: f64 = 15.0;
const COMPOSITE_MODERATE_MAX: f64 = 45.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositeRisk {
    /// Weighted mean of the per-instrument risk percentages.
    pub overall_risk: f64,
    pub category: RiskCategory,
    /// Names of instruments whose individual category is high.
    pub dominant_factors: Vec<String>,
    /// Narrative, cross-instrument guidance.
    pub recommendations: Vec<String>,
}

fn instrument_weight(instrument_id: &str) -> f64 {
    match instrument_id {
        "mmse" => 0.25,
        "moca" => 0.25,
        "phq9" => 0.20,
        "ad8" => 0.15,
        "pss" => 0.15,
        _ => COMPOSITE_FALLBACK_WEIGHT,
    }
}

/// Combine completed results into one overall risk summary. The mean is
/// normalized by the sum of the weights of the instruments present, not a
/// fixed denominator, so a partial battery still produces a 0-100 value.
pub fn combine(results: &[AssessmentResult]) -> CompositeRisk {
    if results.is_empty() {
        return CompositeRisk {
            overall_risk: 0.0,
            category: RiskCategory::Low,
            dominant_factors: Vec::new(),
            recommendations: Vec::new(),
        };
    }

    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for result in results {
        let weight = instrument_weight(&result.instrument_id);
        weighted_sum += result.risk.risk_percentage * weight;
        weight_total += weight;
    }
    let overall_risk = weighted_sum / weight_total;

    let category = if overall_risk <= COMPOSITE_LOW_MAX {
        RiskCategory::Low
    } else if overall_risk <= COMPOSITE_MODERATE_MAX {
        RiskCategory::Moderate
    } else {
        RiskCategory::High
    };

    let dominant_factors = results
        .iter()
        .filter(|r| r.risk.risk_category == RiskCategory::High)
        .map(|r| r.instrument_id.clone())
        .collect();

    CompositeRisk {
        overall_risk,
        category,
        dominant_factors,
        recommendations: narratives(results),
    }
}

fn narratives(results: &[AssessmentResult]) -> Vec<String> {
    let mut out = Vec::new();

    let category_of = |id: &str| {
        results
            .iter()
            .find(|r| r.instrument_id == id)
            .map(|r| r.risk.risk_category)
    };

    if let Some(category) = category_of("phq9")
        && category != RiskCategory::Low
    {
        out.push(
            "Depressive symptoms are present; a mental-health referral should \
             accompany any cognitive follow-up."
                .to_string(),
        );
    }

    if category_of("mmse") == Some(RiskCategory::High)
        && category_of("moca") == Some(RiskCategory::High)
    {
        out.push(
            "Both cognitive screens are in the high-risk range; a comprehensive \
             neuropsychological evaluation is warranted."
                .to_string(),
        );
    }

    if category_of("ad8").is_some_and(|c| c != RiskCategory::Low)
        && category_of("mmse") == Some(RiskCategory::Low)
        && category_of("moca").is_none()
    {
        out.push(
            "Informant-reported change without corresponding screen findings; \
             consider a second cognitive instrument."
                .to_string(),
        );
    }

    if category_of("pss") == Some(RiskCategory::High) {
        out.push(
            "High motor-symptom burden; coordinate cognitive follow-up with a \
             movement-disorder specialist."
                .to_string(),
        );
    }

    out
}
