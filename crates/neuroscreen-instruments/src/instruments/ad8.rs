use neuroscreen_core::models::result::RiskCategory;

use super::direct;
use crate::definition::{
    AgeBandDelta, Aggregation, CategoryCutpoints, ConfidenceConfig, DemographicAdjustments,
    EducationBandDelta, InstrumentDefinition, RiskAlgorithm, RiskBand, RiskMapping, ScoringConfig,
    SectionSpec,
};

/// AD8: eight-item informant interview about observed change.
/// Each "yes, a change" scores 1; a total of 2 or more suggests cognitive
/// impairment and triggers a dementia-evaluation recommendation downstream.
pub fn definition() -> InstrumentDefinition {
    let yes_no = [(1.0, "Yes, a change"), (0.0, "No change")];

    let items = [
        "judgment",
        "interest",
        "repeats",
        "tools",
        "month_year",
        "finances",
        "appointments",
        "daily_thinking",
    ];

    let questions = items
        .iter()
        .map(|item| direct(&format!("ad8_{item}"), Some("informant_items"), &yes_no))
        .collect();

    InstrumentDefinition {
        id: "ad8".to_string(),
        name: "AD8".to_string(),
        questions,
        scoring: ScoringConfig {
            min_score: 0.0,
            max_score: 8.0,
            aggregation: Aggregation::Sum,
            sections: vec![SectionSpec {
                id: "informant_items".to_string(),
                max_score: 8.0,
                weight: 1.0,
                question_prefix: Some("ad8_".to_string()),
            }],
            adjustments: Vec::new(),
        },
        risk: RiskMapping {
            algorithm: RiskAlgorithm::Threshold,
            // The jump from 5% to 20% between the first two bands is in the
            // validated source tables; the bands still cover every score.
            bands: vec![
                RiskBand {
                    score_lo: 0.0,
                    score_hi: 1.0,
                    pct_at_lo: 0.0,
                    pct_at_hi: 5.0,
                    category: RiskCategory::Low,
                },
                RiskBand {
                    score_lo: 2.0,
                    score_hi: 3.0,
                    pct_at_lo: 20.0,
                    pct_at_hi: 40.0,
                    category: RiskCategory::Moderate,
                },
                RiskBand {
                    score_lo: 4.0,
                    score_hi: 8.0,
                    pct_at_lo: 40.0,
                    pct_at_hi: 80.0,
                    category: RiskCategory::High,
                },
            ],
        },
        demographics: DemographicAdjustments {
            age_bands: vec![
                AgeBandDelta {
                    min_age: 80,
                    max_age: 120,
                    delta: 6.0,
                    label: "advanced_age".to_string(),
                },
                AgeBandDelta {
                    min_age: 70,
                    max_age: 79,
                    delta: 3.0,
                    label: "older_age".to_string(),
                },
            ],
            education_bands: vec![EducationBandDelta {
                min_years: 0,
                max_years: 7,
                delta: 2.0,
                label: "limited_education".to_string(),
            }],
            gender_deltas: Vec::new(),
        },
        cutpoints: CategoryCutpoints {
            low_max: 5.0,
            moderate_max: 40.0,
        },
        confidence: ConfidenceConfig {
            // Informant report is noisier than direct testing.
            half_width: 8.0,
            widen_by: 3.0,
            central_age_min: 55,
            central_age_max: 85,
            central_education_min: 8,
            central_education_max: 16,
        },
    }
}
