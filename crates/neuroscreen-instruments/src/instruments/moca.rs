use neuroscreen_core::models::result::RiskCategory;

use super::{correct_item, custom};
use crate::definition::{
    AgeBandDelta, Aggregation, CategoryCutpoints, ConfidenceConfig, DemographicAdjustments,
    EducationBandDelta, InstrumentDefinition, LookupEntry, Question, RiskAlgorithm, RiskBand,
    RiskMapping, ScoreAdjustment, ScoringConfig, ScoringRule, SectionSpec,
};

const RECALL_WORDS: [&str; 5] = ["face", "velvet", "church", "daisy", "red"];

/// MoCA: Montreal Cognitive Assessment, 5-section variant, 30 points.
/// Carries the standard +1 education adjustment for 12 or fewer years of
/// schooling. A raw score below 10 is treated as an emergency downstream.
pub fn definition() -> InstrumentDefinition {
    let questions = vec![
        correct_item("moca_vse_trail", Some("visuospatial_executive")),
        custom(
            "moca_vse_cube",
            Some("visuospatial_executive"),
            "drawing_elements",
            &["front_face", "depth_lines", "hidden_edges"],
            1.0,
        ),
        custom(
            "moca_vse_clock",
            Some("visuospatial_executive"),
            "clock_drawing",
            &["contour", "numbers", "hands"],
            3.0,
        ),
        correct_item("moca_attention_digits_forward", Some("attention")),
        correct_item("moca_attention_digits_backward", Some("attention")),
        correct_item("moca_attention_vigilance", Some("attention")),
        Question {
            id: "moca_attention_serial_sevens".to_string(),
            section: Some("attention".to_string()),
            rule: ScoringRule::Calculated {
                formula: "serial_sevens".to_string(),
            },
            options: Vec::new(),
            expected: ["93", "86", "79", "72", "65"].map(String::from).to_vec(),
            max_points: Some(3.0),
            threshold: None,
        },
        naming("moca_naming_lion", &["lion", "león"]),
        naming("moca_naming_rhinoceros", &["rhinoceros", "rinoceronte"]),
        naming("moca_naming_camel", &["camel", "dromedary", "camello"]),
        correct_item("moca_repetition_1", Some("language")),
        correct_item("moca_repetition_2", Some("language")),
        fluency(),
        correct_item("moca_abstraction_1", Some("language")),
        correct_item("moca_abstraction_2", Some("language")),
        custom(
            "moca_delayed_recall",
            Some("delayed_recall"),
            "recall_match",
            &RECALL_WORDS,
            5.0,
        ),
        custom("moca_orientation_year", Some("orientation"), "orientation_year", &[], 1.0),
        custom("moca_orientation_month", Some("orientation"), "orientation_month", &[], 1.0),
        custom("moca_orientation_day", Some("orientation"), "orientation_day", &[], 1.0),
        custom("moca_orientation_weekday", Some("orientation"), "orientation_weekday", &[], 1.0),
        correct_item("moca_orientation_place", Some("orientation")),
        correct_item("moca_orientation_city", Some("orientation")),
    ];

    InstrumentDefinition {
        id: "moca".to_string(),
        name: "MoCA".to_string(),
        questions,
        scoring: ScoringConfig {
            min_score: 0.0,
            max_score: 30.0,
            aggregation: Aggregation::Sum,
            sections: vec![
                section("visuospatial_executive", 5.0, "moca_vse_"),
                section("attention", 6.0, "moca_attention_"),
                section("language", 8.0, "moca_naming_"),
                section("delayed_recall", 5.0, "moca_delayed_"),
                section("orientation", 6.0, "moca_orientation_"),
            ],
            adjustments: vec![ScoreAdjustment::EducationYears {
                max_years: 12,
                delta: 1.0,
            }],
        },
        risk: RiskMapping {
            algorithm: RiskAlgorithm::Threshold,
            bands: vec![
                RiskBand {
                    score_lo: 0.0,
                    score_hi: 11.0,
                    pct_at_lo: 95.0,
                    pct_at_hi: 70.0,
                    category: RiskCategory::High,
                },
                RiskBand {
                    score_lo: 12.0,
                    score_hi: 17.0,
                    pct_at_lo: 70.0,
                    pct_at_hi: 40.0,
                    category: RiskCategory::High,
                },
                RiskBand {
                    score_lo: 18.0,
                    score_hi: 23.0,
                    pct_at_lo: 40.0,
                    pct_at_hi: 5.0,
                    category: RiskCategory::Moderate,
                },
                RiskBand {
                    score_lo: 24.0,
                    score_hi: 30.0,
                    pct_at_lo: 5.0,
                    pct_at_hi: 0.0,
                    category: RiskCategory::Low,
                },
            ],
        },
        demographics: DemographicAdjustments {
            age_bands: vec![
                AgeBandDelta {
                    min_age: 75,
                    max_age: 120,
                    delta: 8.0,
                    label: "advanced_age".to_string(),
                },
                AgeBandDelta {
                    min_age: 65,
                    max_age: 74,
                    delta: 4.0,
                    label: "older_age".to_string(),
                },
                AgeBandDelta {
                    min_age: 0,
                    max_age: 49,
                    delta: -2.0,
                    label: "younger_age".to_string(),
                },
            ],
            education_bands: vec![
                EducationBandDelta {
                    min_years: 0,
                    max_years: 7,
                    delta: 5.0,
                    label: "limited_education".to_string(),
                },
                EducationBandDelta {
                    min_years: 16,
                    max_years: 30,
                    delta: -3.0,
                    label: "extended_education".to_string(),
                },
            ],
            gender_deltas: Vec::new(),
        },
        cutpoints: CategoryCutpoints {
            low_max: 5.0,
            moderate_max: 40.0,
        },
        confidence: ConfidenceConfig {
            half_width: 5.0,
            widen_by: 3.0,
            central_age_min: 50,
            central_age_max: 80,
            central_education_min: 8,
            central_education_max: 16,
        },
    }
}

fn section(id: &str, max_score: f64, prefix: &str) -> SectionSpec {
    SectionSpec {
        id: id.to_string(),
        max_score,
        weight: 1.0,
        question_prefix: Some(prefix.to_string()),
    }
}

/// Animal naming accepts regional synonyms and matches accent-insensitively.
fn naming(id: &str, accepted: &[&str]) -> Question {
    Question {
        id: id.to_string(),
        section: Some("language".to_string()),
        rule: ScoringRule::Lookup {
            table: accepted
                .iter()
                .map(|key| LookupEntry {
                    key: (*key).to_string(),
                    points: 1.0,
                })
                .collect(),
            accent_insensitive: true,
        },
        options: Vec::new(),
        expected: Vec::new(),
        max_points: Some(1.0),
        threshold: None,
    }
}

fn fluency() -> Question {
    Question {
        id: "moca_fluency".to_string(),
        section: Some("language".to_string()),
        rule: ScoringRule::Calculated {
            formula: "word_count".to_string(),
        },
        options: Vec::new(),
        expected: Vec::new(),
        max_points: Some(1.0),
        // Standard MoCA criterion: 11 or more words in one minute.
        threshold: Some(11),
    }
}
