use neuroscreen_core::models::result::RiskCategory;

use super::{correct_item, custom};
use crate::definition::{
    AgeBandDelta, Aggregation, CategoryCutpoints, ConfidenceConfig, DemographicAdjustments,
    EducationBandDelta, InstrumentDefinition, LookupEntry, Question, RiskAlgorithm, RiskBand,
    RiskMapping, ScoringConfig, ScoringRule, SectionSpec,
};

const REGISTRATION_WORDS: [&str; 3] = ["apple", "penny", "table"];

/// MMSE: Mini-Mental State Examination.
/// 8 sections, 30 points. Score of 26+ is conventionally normal;
/// 17 and below suggests significant impairment.
pub fn definition() -> InstrumentDefinition {
    let mut questions = vec![
        custom("mmse_time_year", Some("orientation_time"), "orientation_year", &[], 1.0),
        custom("mmse_time_season", Some("orientation_time"), "orientation_season", &[], 1.0),
        custom("mmse_time_month", Some("orientation_time"), "orientation_month", &[], 1.0),
        custom("mmse_time_weekday", Some("orientation_time"), "orientation_weekday", &[], 1.0),
        custom("mmse_time_day", Some("orientation_time"), "orientation_day", &[], 1.0),
    ];

    // Place items carry no explicit section; the aggregator assigns them
    // through the section's question prefix.
    for place in ["country", "state", "city", "clinic", "floor"] {
        questions.push(correct_item(&format!("mmse_place_{place}"), None));
    }

    questions.extend([
        custom(
            "mmse_registration",
            Some("registration"),
            "recall_match",
            &REGISTRATION_WORDS,
            3.0,
        ),
        serial_sevens(),
        custom(
            "mmse_delayed_recall",
            Some("recall"),
            "recall_match",
            &REGISTRATION_WORDS,
            3.0,
        ),
        correct_item("mmse_naming_pencil", Some("language")),
        correct_item("mmse_naming_watch", Some("language")),
        repetition(),
        custom(
            "mmse_three_step_command",
            Some("language"),
            "multi_step",
            &["take_paper", "fold_in_half", "place_on_floor"],
            3.0,
        ),
        correct_item("mmse_reading", Some("reading_writing")),
        writing(),
        custom(
            "mmse_pentagon_copy",
            Some("construction"),
            "drawing_elements",
            &["pentagon_left", "pentagon_right", "intersection"],
            1.0,
        ),
    ]);

    InstrumentDefinition {
        id: "mmse".to_string(),
        name: "MMSE".to_string(),
        questions,
        scoring: ScoringConfig {
            min_score: 0.0,
            max_score: 30.0,
            aggregation: Aggregation::Sum,
            sections: vec![
                section("orientation_time", 5.0, "mmse_time_"),
                section("orientation_place", 5.0, "mmse_place_"),
                section("registration", 3.0, "mmse_registration"),
                section("attention_calculation", 5.0, "mmse_serial"),
                section("recall", 3.0, "mmse_delayed"),
                section("language", 6.0, "mmse_naming_"),
                section("reading_writing", 2.0, "mmse_reading"),
                section("construction", 1.0, "mmse_pentagon"),
            ],
            adjustments: Vec::new(),
        },
        risk: RiskMapping {
            algorithm: RiskAlgorithm::Threshold,
            bands: vec![
                band(0.0, 17.0, 95.0, 40.0, RiskCategory::High),
                band(18.0, 25.0, 40.0, 5.0, RiskCategory::Moderate),
                band(26.0, 30.0, 5.0, 0.0, RiskCategory::Low),
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

fn band(score_lo: f64, score_hi: f64, pct_at_lo: f64, pct_at_hi: f64, category: RiskCategory) -> RiskBand {
    RiskBand {
        score_lo,
        score_hi,
        pct_at_lo,
        pct_at_hi,
        category,
    }
}

fn serial_sevens() -> Question {
    Question {
        id: "mmse_serial_sevens".to_string(),
        section: Some("attention_calculation".to_string()),
        rule: ScoringRule::Calculated {
            formula: "serial_sevens".to_string(),
        },
        options: Vec::new(),
        expected: ["93", "86", "79", "72", "65"].map(String::from).to_vec(),
        max_points: Some(5.0),
        threshold: None,
    }
}

fn repetition() -> Question {
    Question {
        id: "mmse_repetition".to_string(),
        section: Some("language".to_string()),
        rule: ScoringRule::Lookup {
            table: vec![LookupEntry {
                key: "no ifs ands or buts".to_string(),
                points: 1.0,
            }],
            accent_insensitive: false,
        },
        options: Vec::new(),
        expected: Vec::new(),
        max_points: Some(1.0),
        threshold: None,
    }
}

fn writing() -> Question {
    Question {
        id: "mmse_writing".to_string(),
        section: Some("reading_writing".to_string()),
        rule: ScoringRule::Calculated {
            formula: "word_count".to_string(),
        },
        options: Vec::new(),
        expected: Vec::new(),
        max_points: Some(1.0),
        // A spontaneous sentence needs a subject and a verb; three words
        // is the scoring heuristic.
        threshold: Some(3),
    }
}
