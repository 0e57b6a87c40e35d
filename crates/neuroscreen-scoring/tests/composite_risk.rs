//! Cross-instrument composite risk.

use neuroscreen_core::models::result::{
    AssessmentResult, CompletionMeta, ConfidenceInterval, RiskAssessment, RiskCategory,
};
use neuroscreen_scoring::composite::combine;

fn result(instrument_id: &str, risk_percentage: f64, category: RiskCategory) -> AssessmentResult {
    AssessmentResult {
        instrument_id: instrument_id.to_string(),
        raw_score: 0.0,
        adjusted_score: 0.0,
        max_score: 30.0,
        section_scores: Vec::new(),
        risk: RiskAssessment {
            instrument_id: instrument_id.to_string(),
            raw_score: 0.0,
            adjusted_score: 0.0,
            risk_percentage,
            risk_category: category,
            confidence_interval: ConfidenceInterval {
                lower: risk_percentage,
                upper: risk_percentage,
            },
            factors: Vec::new(),
            algorithm: "threshold".to_string(),
            assessed_at: "2025-06-15T12:00:00Z".parse().unwrap(),
        },
        recommendations: Vec::new(),
        completion: CompletionMeta {
            answered: 1,
            expected: 1,
            percent: 100.0,
            complete: true,
        },
    }
}

#[test]
fn empty_input_is_low_risk() {
    let composite = combine(&[]);
    assert_eq!(composite.overall_risk, 0.0);
    assert_eq!(composite.category, RiskCategory::Low);
    assert!(composite.dominant_factors.is_empty());
    assert!(composite.recommendations.is_empty());
}

#[test]
fn weighted_mean_normalizes_by_present_weights() {
    let results = vec![
        result("mmse", 10.0, RiskCategory::Moderate),
        result("phq9", 50.0, RiskCategory::High),
    ];
    let composite = combine(&results);

    // (10 * 0.25 + 50 * 0.20) / (0.25 + 0.20)
    assert!((composite.overall_risk - 27.777_777_777_777_78).abs() < 1e-9);
    assert_eq!(composite.category, RiskCategory::Moderate);
}

#[test]
fn single_instrument_composite_equals_its_own_risk() {
    let composite = combine(&[result("pss", 66.0, RiskCategory::High)]);
    assert!((composite.overall_risk - 66.0).abs() < 1e-9);
    assert_eq!(composite.category, RiskCategory::High);
    assert_eq!(composite.dominant_factors, vec!["pss".to_string()]);
}

#[test]
fn unlisted_instruments_use_the_fallback_weight() {
    // A future instrument outside the fixed table still contributes, at the
    // small fallback weight.
    let results = vec![
        result("grip_strength", 60.0, RiskCategory::High),
        result("mmse", 10.0, RiskCategory::Moderate),
    ];
    let composite = combine(&results);

    // (60 * 0.10 + 10 * 0.25) / 0.35
    assert!((composite.overall_risk - 24.285_714_285_714_285).abs() < 1e-6);
}

#[test]
fn category_thresholds_are_fifteen_and_forty_five() {
    assert_eq!(
        combine(&[result("mmse", 15.0, RiskCategory::Moderate)]).category,
        RiskCategory::Low,
    );
    assert_eq!(
        combine(&[result("mmse", 15.1, RiskCategory::Moderate)]).category,
        RiskCategory::Moderate,
    );
    assert_eq!(
        combine(&[result("mmse", 45.1, RiskCategory::High)]).category,
        RiskCategory::High,
    );
}

#[test]
fn dominant_factors_list_individually_high_instruments() {
    let results = vec![
        result("mmse", 70.0, RiskCategory::High),
        result("phq9", 10.0, RiskCategory::Low),
        result("pss", 66.0, RiskCategory::High),
    ];
    let composite = combine(&results);
    assert_eq!(
        composite.dominant_factors,
        vec!["mmse".to_string(), "pss".to_string()],
    );
}

#[test]
fn depression_above_low_adds_a_mental_health_referral() {
    let results = vec![
        result("mmse", 10.0, RiskCategory::Low),
        result("phq9", 30.0, RiskCategory::Moderate),
    ];
    let composite = combine(&results);
    assert!(composite
        .recommendations
        .iter()
        .any(|r| r.contains("mental-health referral")));
}

#[test]
fn concordant_high_cognitive_screens_prompt_full_evaluation() {
    let results = vec![
        result("mmse", 70.0, RiskCategory::High),
        result("moca", 72.0, RiskCategory::High),
    ];
    let composite = combine(&results);
    assert!(composite
        .recommendations
        .iter()
        .any(|r| r.contains("neuropsychological evaluation")));
}
