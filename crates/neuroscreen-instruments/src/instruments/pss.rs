use neuroscreen_core::models::profile::Gender;
use neuroscreen_core::models::result::RiskCategory;

use super::direct;
use crate::definition::{
    AgeBandDelta, Aggregation, CategoryCutpoints, ConfidenceConfig, DemographicAdjustments,
    GenderDelta, InstrumentDefinition, Question, RiskAlgorithm, RiskBand, RiskMapping,
    ScoringConfig, SectionSpec,
};

/// PSS: Parkinson's Symptom Screen. Three weighted sections (motor symptoms
/// count double, non-motor 1.5x, daily activities 1x).
///
/// The declared maximum is 44 while the weighted section maxima sum to 41.
/// That mismatch is present in the source definitions this screen was taken
/// from; it is preserved here (clamping uses the declared 44) and surfaced
/// through `InstrumentDefinition::section_sum`, not silently corrected.
pub fn definition() -> InstrumentDefinition {
    let severity = [
        (0.0, "Never"),
        (1.0, "Sometimes"),
        (2.0, "Often"),
    ];

    let motor = ["tremor", "stiffness", "slowness", "balance", "handwriting"];
    let non_motor = ["smell_loss", "sleep_acting_out", "constipation", "depression", "dizziness"];
    let daily = ["dressing", "walking", "speech"];

    let mut questions: Vec<Question> = Vec::new();
    for item in motor {
        questions.push(direct(&format!("pss_motor_{item}"), Some("motor"), &severity));
    }
    for item in non_motor {
        questions.push(direct(&format!("pss_nonmotor_{item}"), Some("non_motor"), &severity));
    }
    for item in daily {
        questions.push(direct(&format!("pss_daily_{item}"), Some("daily_activities"), &severity));
    }

    InstrumentDefinition {
        id: "pss".to_string(),
        name: "Parkinson's Symptom Screen".to_string(),
        questions,
        scoring: ScoringConfig {
            min_score: 0.0,
            max_score: 44.0,
            aggregation: Aggregation::WeightedSum,
            sections: vec![
                SectionSpec {
                    id: "motor".to_string(),
                    max_score: 10.0,
                    weight: 2.0,
                    question_prefix: Some("pss_motor_".to_string()),
                },
                SectionSpec {
                    id: "non_motor".to_string(),
                    max_score: 10.0,
                    weight: 1.5,
                    question_prefix: Some("pss_nonmotor_".to_string()),
                },
                SectionSpec {
                    id: "daily_activities".to_string(),
                    max_score: 6.0,
                    weight: 1.0,
                    question_prefix: Some("pss_daily_".to_string()),
                },
            ],
            adjustments: Vec::new(),
        },
        risk: RiskMapping {
            algorithm: RiskAlgorithm::WeightedThreshold,
            bands: vec![
                RiskBand {
                    score_lo: 0.0,
                    score_hi: 8.0,
                    pct_at_lo: 0.0,
                    pct_at_hi: 10.0,
                    category: RiskCategory::Low,
                },
                RiskBand {
                    score_lo: 9.0,
                    score_hi: 18.0,
                    pct_at_lo: 10.0,
                    pct_at_hi: 50.0,
                    category: RiskCategory::Moderate,
                },
                RiskBand {
                    score_lo: 19.0,
                    score_hi: 44.0,
                    pct_at_lo: 50.0,
                    pct_at_hi: 90.0,
                    category: RiskCategory::High,
                },
            ],
        },
        demographics: DemographicAdjustments {
            age_bands: vec![
                AgeBandDelta {
                    min_age: 70,
                    max_age: 120,
                    delta: 5.0,
                    label: "advanced_age".to_string(),
                },
                AgeBandDelta {
                    min_age: 60,
                    max_age: 69,
                    delta: 2.0,
                    label: "older_age".to_string(),
                },
                AgeBandDelta {
                    min_age: 0,
                    max_age: 39,
                    delta: -3.0,
                    label: "younger_age".to_string(),
                },
            ],
            education_bands: Vec::new(),
            gender_deltas: vec![GenderDelta {
                gender: Gender::Male,
                delta: 4.0,
                label: "male_gender".to_string(),
            }],
        },
        cutpoints: CategoryCutpoints {
            low_max: 10.0,
            moderate_max: 50.0,
        },
        confidence: ConfidenceConfig {
            // Self-reported symptom severity, the widest interval of the set.
            half_width: 10.0,
            widen_by: 3.0,
            central_age_min: 50,
            central_age_max: 80,
            central_education_min: 8,
            central_education_max: 16,
        },
    }
}
