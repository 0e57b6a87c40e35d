//! Per-rule scoring behavior: dispatch, normalization, and the named
//! strategy registry.

use jiff::civil::date;

use neuroscreen_core::models::context::ScoringContext;
use neuroscreen_core::models::profile::UserProfile;
use neuroscreen_core::models::response::{AnswerValue, Response};
use neuroscreen_core::models::warning::WarningCode;
use neuroscreen_instruments::definition::{Question, ScoringRule};
use neuroscreen_instruments::InstrumentCatalog;
use neuroscreen_scoring::scorer::{normalize, score_response};

fn ctx_on(reference_date: jiff::civil::Date) -> ScoringContext {
    ScoringContext {
        profile: UserProfile {
            age: 60,
            years_of_education: 12,
            gender: None,
            language: "en".to_string(),
        },
        reference_date,
        reference_instant: "2025-06-15T12:00:00Z".parse().unwrap(),
    }
}

fn ctx() -> ScoringContext {
    ctx_on(date(2025, 6, 15))
}

fn resp(question_id: &str, answer: AnswerValue) -> Response {
    Response {
        question_id: question_id.to_string(),
        answer,
        answered_at: "2025-06-15T11:55:00Z".parse().unwrap(),
    }
}

fn score(instrument: &str, question_id: &str, answer: AnswerValue, ctx: &ScoringContext) -> f64 {
    let catalog = InstrumentCatalog::new();
    let def = catalog.definition(instrument).unwrap();
    let question = def.question(question_id).unwrap();
    let (score, warning) = score_response(question, &resp(question_id, answer), ctx);
    assert!(warning.is_none());
    score
}

#[test]
fn direct_matches_by_value_or_label() {
    let by_value = score("phq9", "phq9_q3", AnswerValue::Number(2.0), &ctx());
    assert_eq!(by_value, 2.0);

    let by_label = score(
        "phq9",
        "phq9_q3",
        AnswerValue::Text("nearly every day".to_string()),
        &ctx(),
    );
    assert_eq!(by_label, 3.0);

    let unmatched = score("phq9", "phq9_q3", AnswerValue::Number(7.0), &ctx());
    assert_eq!(unmatched, 0.0);
}

#[test]
fn informant_booleans_score_as_direct_options() {
    assert_eq!(score("ad8", "ad8_judgment", AnswerValue::Bool(true), &ctx()), 1.0);
    assert_eq!(score("ad8", "ad8_judgment", AnswerValue::Bool(false), &ctx()), 0.0);
}

#[test]
fn lookup_ignores_case_and_punctuation() {
    let phrase = score(
        "mmse",
        "mmse_repetition",
        AnswerValue::Text("No ifs, ands, or buts!".to_string()),
        &ctx(),
    );
    assert_eq!(phrase, 1.0);

    let wrong = score(
        "mmse",
        "mmse_repetition",
        AnswerValue::Text("no ifs or buts".to_string()),
        &ctx(),
    );
    assert_eq!(wrong, 0.0);
}

#[test]
fn naming_lookup_is_accent_insensitive_where_declared() {
    let accented = score(
        "moca",
        "moca_naming_lion",
        AnswerValue::Text("León".to_string()),
        &ctx(),
    );
    assert_eq!(accented, 1.0);

    let synonym = score(
        "moca",
        "moca_naming_camel",
        AnswerValue::Text("Dromedary".to_string()),
        &ctx(),
    );
    assert_eq!(synonym, 1.0);
}

#[test]
fn serial_sevens_counts_positional_matches() {
    let answer = AnswerValue::Items(
        ["93", "86", "80", "72", "65"].map(String::from).to_vec(),
    );
    assert_eq!(score("mmse", "mmse_serial_sevens", answer, &ctx()), 4.0);

    let empty = AnswerValue::Items(Vec::new());
    assert_eq!(score("mmse", "mmse_serial_sevens", empty, &ctx()), 0.0);
}

#[test]
fn word_count_formula_is_a_threshold() {
    let sentence = AnswerValue::Text("I feel fine today".to_string());
    assert_eq!(score("mmse", "mmse_writing", sentence, &ctx()), 1.0);

    let fragment = AnswerValue::Text("fine".to_string());
    assert_eq!(score("mmse", "mmse_writing", fragment, &ctx()), 0.0);
}

#[test]
fn recall_matching_is_case_insensitive_and_order_independent() {
    let answer = AnswerValue::Items(
        ["TABLE", "banana", "Apple"].map(String::from).to_vec(),
    );
    assert_eq!(score("mmse", "mmse_delayed_recall", answer, &ctx()), 2.0);
}

#[test]
fn multi_step_counts_distinct_completed_steps() {
    let answer = AnswerValue::Items(
        ["fold_in_half", "take_paper", "take_paper"].map(String::from).to_vec(),
    );
    assert_eq!(score("mmse", "mmse_three_step_command", answer, &ctx()), 2.0);
}

#[test]
fn day_of_month_allows_one_day_of_tolerance() {
    for day in [14.0, 15.0, 16.0] {
        assert_eq!(
            score("mmse", "mmse_time_day", AnswerValue::Number(day), &ctx()),
            1.0,
            "day {day}",
        );
    }
    assert_eq!(
        score("mmse", "mmse_time_day", AnswerValue::Number(13.0), &ctx()),
        0.0,
    );
}

#[test]
fn day_tolerance_crosses_month_boundaries() {
    let end_of_june = ctx_on(date(2025, 6, 30));
    assert_eq!(
        score("mmse", "mmse_time_day", AnswerValue::Number(1.0), &end_of_june),
        1.0,
    );
}

#[test]
fn temporal_orientation_uses_the_injected_date() {
    assert_eq!(
        score("mmse", "mmse_time_year", AnswerValue::Number(2025.0), &ctx()),
        1.0,
    );
    assert_eq!(
        score("mmse", "mmse_time_month", AnswerValue::Text("June".to_string()), &ctx()),
        1.0,
    );
    assert_eq!(
        score("mmse", "mmse_time_weekday", AnswerValue::Text("Sunday".to_string()), &ctx()),
        1.0,
    );
    assert_eq!(
        score("mmse", "mmse_time_season", AnswerValue::Text("summer".to_string()), &ctx()),
        1.0,
    );

    let winter = ctx_on(date(2025, 1, 10));
    assert_eq!(
        score("mmse", "mmse_time_season", AnswerValue::Text("Winter".to_string()), &winter),
        1.0,
    );
    assert_eq!(
        score("mmse", "mmse_time_season", AnswerValue::Text("summer".to_string()), &winter),
        0.0,
    );
}

#[test]
fn unregistered_strategy_scores_zero_with_a_warning() {
    let question = Question {
        id: "future_item".to_string(),
        section: Some("somewhere".to_string()),
        rule: ScoringRule::Custom {
            strategy: "gait_analysis".to_string(),
        },
        options: Vec::new(),
        expected: Vec::new(),
        max_points: Some(1.0),
        threshold: None,
    };

    let (score, warning) =
        score_response(&question, &resp("future_item", AnswerValue::Number(1.0)), &ctx());
    assert_eq!(score, 0.0);
    let warning = warning.unwrap();
    assert_eq!(warning.code, WarningCode::UnrecognizedRule);
    assert_eq!(warning.question_id.as_deref(), Some("future_item"));
}

#[test]
fn normalization_collapses_whitespace_and_punctuation() {
    assert_eq!(normalize("  No ifs,   ands -- or buts!  ", false), "no ifs ands or buts");
    assert_eq!(normalize("León", true), "leon");
    // Accent folding is opt-in; without it the accent is preserved.
    assert_eq!(normalize("León", false), "león");
}
