//! Recommendation generation: emergency escalation, instrument rules,
//! lifestyle selection, and the dedupe/priority merge.

use std::collections::HashSet;

use jiff::civil::date;

use neuroscreen_core::models::context::ScoringContext;
use neuroscreen_core::models::profile::{Gender, UserProfile};
use neuroscreen_core::models::recommendation::{Priority, Recommendation};
use neuroscreen_core::models::response::{AnswerValue, Response};
use neuroscreen_scoring::{EmergencyTrigger, ScoringEngine};

fn ctx_with(age: u32, years_of_education: u32, gender: Option<Gender>) -> ScoringContext {
    ScoringContext {
        profile: UserProfile {
            age,
            years_of_education,
            gender,
            language: "en".to_string(),
        },
        reference_date: date(2025, 6, 15),
        reference_instant: "2025-06-15T12:00:00Z".parse().unwrap(),
    }
}

fn num(question_id: &str, value: f64) -> Response {
    Response {
        question_id: question_id.to_string(),
        answer: AnswerValue::Number(value),
        answered_at: "2025-06-15T11:55:00Z".parse().unwrap(),
    }
}

fn phq9_responses(item_scores: [f64; 9]) -> Vec<Response> {
    item_scores
        .iter()
        .enumerate()
        .map(|(i, score)| num(&format!("phq9_q{}", i + 1), *score))
        .collect()
}

fn assert_well_formed(recommendations: &[Recommendation]) {
    let mut ids = HashSet::new();
    for rec in recommendations {
        assert!(ids.insert(&rec.id), "duplicate recommendation id {}", rec.id);
    }
    for pair in recommendations.windows(2) {
        assert!(
            pair[0].priority >= pair[1].priority,
            "priorities out of order: {} before {}",
            pair[0].id,
            pair[1].id,
        );
        if pair[0].priority == pair[1].priority {
            assert!(
                pair[0].follow_up_days <= pair[1].follow_up_days,
                "follow-up tie-break violated between {} and {}",
                pair[0].id,
                pair[1].id,
            );
        }
    }
}

#[test]
fn every_emergency_produces_an_urgent_entry() {
    let engine = ScoringEngine::new();

    let ideation = engine
        .score(
            "phq9",
            &phq9_responses([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]),
            &ctx_with(50, 14, None),
        )
        .unwrap();
    assert!(!ideation.emergencies.is_empty());
    assert!(ideation
        .result
        .recommendations
        .iter()
        .any(|r| r.priority == Priority::Urgent));

    let impaired = engine
        .score("moca", &[num("moca_vse_trail", 1.0)], &ctx_with(50, 14, None))
        .unwrap();
    assert!(impaired
        .emergencies
        .contains(&EmergencyTrigger::SevereCognitiveImpairment));
    assert!(impaired
        .result
        .recommendations
        .iter()
        .any(|r| r.priority == Priority::Urgent));
}

#[test]
fn compound_demographic_risk_escalates_high_results() {
    let engine = ScoringEngine::new();
    // Young adult, limited education, female: three adverse deltas on a
    // severe depression result.
    let scored = engine
        .score(
            "phq9",
            &phq9_responses([3.0; 9]),
            &ctx_with(22, 8, Some(Gender::Female)),
        )
        .unwrap();

    assert!(scored.emergencies.contains(&EmergencyTrigger::CompoundRisk));
    assert!(scored.emergencies.contains(&EmergencyTrigger::SuicidalIdeation));
    assert!(scored
        .result
        .recommendations
        .iter()
        .any(|r| r.id == "emergency_compound_risk"));
    assert_well_formed(&scored.result.recommendations);
}

#[test]
fn severe_depression_gets_urgent_psychiatric_care() {
    let engine = ScoringEngine::new();
    let scored = engine
        .score(
            "phq9",
            &phq9_responses([3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 2.0, 0.0]),
            &ctx_with(50, 14, None),
        )
        .unwrap();

    assert_eq!(scored.result.raw_score, 23.0);
    assert!(scored.emergencies.is_empty());
    assert!(scored
        .result
        .recommendations
        .iter()
        .any(|r| r.id == "phq9_severe_psychiatric_care" && r.priority == Priority::Urgent));
    assert_well_formed(&scored.result.recommendations);
}

#[test]
fn lifestyle_baseline_is_always_present() {
    let engine = ScoringEngine::new();
    let scored = engine
        .score("phq9", &phq9_responses([0.0; 9]), &ctx_with(50, 14, None))
        .unwrap();

    let ids: Vec<&str> = scored
        .result
        .recommendations
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    for id in ["lifestyle_exercise", "lifestyle_nutrition", "lifestyle_sleep"] {
        assert!(ids.contains(&id), "missing {id}");
    }
}

#[test]
fn cognitive_instruments_add_cognitive_stimulation() {
    let engine = ScoringEngine::new();
    let mmse = engine
        .score("mmse", &[num("mmse_naming_pencil", 1.0)], &ctx_with(50, 14, None))
        .unwrap();
    assert!(mmse
        .result
        .recommendations
        .iter()
        .any(|r| r.id == "lifestyle_cognitive_stimulation"));

    let phq9 = engine
        .score("phq9", &phq9_responses([0.0; 9]), &ctx_with(50, 14, None))
        .unwrap();
    assert!(!phq9
        .result
        .recommendations
        .iter()
        .any(|r| r.id == "lifestyle_cognitive_stimulation"));
}

#[test]
fn social_engagement_follows_depression_age_or_high_risk() {
    let engine = ScoringEngine::new();
    let has_social = |scored: &neuroscreen_scoring::ScoredAssessment| {
        scored
            .result
            .recommendations
            .iter()
            .any(|r| r.id == "lifestyle_social_engagement")
    };

    // Depression instrument: always.
    let phq9 = engine
        .score("phq9", &phq9_responses([0.0; 9]), &ctx_with(50, 14, None))
        .unwrap();
    assert!(has_social(&phq9));

    // Older adult on a cognitive screen: added by age.
    let older = engine
        .score("mmse", &[num("mmse_naming_pencil", 1.0)], &ctx_with(76, 14, None))
        .unwrap();
    assert!(has_social(&older));

    // Mid-life low-risk informant interview: not added.
    let quiet = engine
        .score("ad8", &[num("ad8_judgment", 0.0)], &ctx_with(55, 14, None))
        .unwrap();
    assert!(!has_social(&quiet));
}

#[test]
fn informant_cutoff_adds_the_dementia_evaluation() {
    let engine = ScoringEngine::new();
    let scored = engine
        .score(
            "ad8",
            &[num("ad8_judgment", 1.0), num("ad8_finances", 1.0)],
            &ctx_with(55, 14, None),
        )
        .unwrap();

    assert!(scored
        .result
        .recommendations
        .iter()
        .any(|r| r.id == "ad8_dementia_evaluation"));
    assert_well_formed(&scored.result.recommendations);
}

#[test]
fn merged_lists_are_deduplicated_and_ordered() {
    let engine = ScoringEngine::new();
    // Ideation plus severe score plus high category: emergency, threshold,
    // and category rules all fire at once.
    let scored = engine
        .score("phq9", &phq9_responses([3.0; 9]), &ctx_with(50, 14, None))
        .unwrap();

    assert_well_formed(&scored.result.recommendations);
    assert_eq!(
        scored.result.recommendations[0].id,
        "emergency_suicide_risk",
        "urgent same-day escalation sorts first",
    );
}
