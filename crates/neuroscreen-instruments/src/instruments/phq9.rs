use neuroscreen_core::models::profile::Gender;
use neuroscreen_core::models::result::RiskCategory;

use super::direct;
use crate::definition::{
    AgeBandDelta, Aggregation, CategoryCutpoints, ConfidenceConfig, DemographicAdjustments,
    EducationBandDelta, GenderDelta, InstrumentDefinition, RiskAlgorithm, RiskBand, RiskMapping,
    ScoringConfig, SectionSpec,
};

/// PHQ-9: Patient Health Questionnaire, 9-item depression scale.
/// Each item 0–3 over the last two weeks, total 0–27. Item 9 asks about
/// thoughts of self-harm and is an emergency trigger when answered above 0.
pub fn definition() -> InstrumentDefinition {
    let frequency = [
        (0.0, "Not at all"),
        (1.0, "Several days"),
        (2.0, "More than half the days"),
        (3.0, "Nearly every day"),
    ];

    let questions = (1..=9)
        .map(|n| direct(&format!("phq9_q{n}"), Some("phq9_items"), &frequency))
        .collect();

    InstrumentDefinition {
        id: "phq9".to_string(),
        name: "PHQ-9".to_string(),
        questions,
        scoring: ScoringConfig {
            min_score: 0.0,
            max_score: 27.0,
            aggregation: Aggregation::Sum,
            sections: vec![SectionSpec {
                id: "phq9_items".to_string(),
                max_score: 27.0,
                weight: 1.0,
                question_prefix: Some("phq9_q".to_string()),
            }],
            adjustments: Vec::new(),
        },
        risk: RiskMapping {
            algorithm: RiskAlgorithm::Threshold,
            bands: vec![
                RiskBand {
                    score_lo: 0.0,
                    score_hi: 9.0,
                    pct_at_lo: 0.0,
                    pct_at_hi: 20.0,
                    category: RiskCategory::Low,
                },
                RiskBand {
                    score_lo: 10.0,
                    score_hi: 14.0,
                    pct_at_lo: 20.0,
                    pct_at_hi: 40.0,
                    category: RiskCategory::Moderate,
                },
                RiskBand {
                    score_lo: 15.0,
                    score_hi: 27.0,
                    pct_at_lo: 40.0,
                    pct_at_hi: 100.0,
                    category: RiskCategory::High,
                },
            ],
        },
        demographics: DemographicAdjustments {
            age_bands: vec![AgeBandDelta {
                min_age: 0,
                max_age: 25,
                delta: 3.0,
                label: "young_adult".to_string(),
            }],
            education_bands: vec![EducationBandDelta {
                min_years: 0,
                max_years: 9,
                delta: 2.0,
                label: "limited_education".to_string(),
            }],
            gender_deltas: vec![GenderDelta {
                gender: Gender::Female,
                delta: 3.0,
                label: "female_gender".to_string(),
            }],
        },
        cutpoints: CategoryCutpoints {
            low_max: 20.0,
            moderate_max: 40.0,
        },
        confidence: ConfidenceConfig {
            half_width: 4.0,
            widen_by: 3.0,
            central_age_min: 25,
            central_age_max: 75,
            central_education_min: 8,
            central_education_max: 16,
        },
    }
}
