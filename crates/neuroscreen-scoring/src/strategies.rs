//! Named scoring strategies and formulas.
//!
//! Question definitions reference these by string key; the dispatcher here
//! resolves the key to a pure function at evaluation time. Definitions stay
//! plain data and every strategy is deterministic given the injected
//! reference date.

use jiff::civil::{Date, Weekday};

use neuroscreen_core::models::context::ScoringContext;
use neuroscreen_core::models::response::AnswerValue;
use neuroscreen_instruments::definition::Question;

use crate::scorer::normalize;

/// Evaluate a named formula over aggregated sub-answers.
/// Returns `None` when the key is not registered.
pub fn formula(
    name: &str,
    question: &Question,
    answer: &AnswerValue,
) -> Option<f64> {
    match name {
        "serial_sevens" => Some(serial_sevens(question, answer)),
        "word_count" => Some(word_count(question, answer)),
        _ => None,
    }
}

/// Evaluate a named custom strategy.
/// Returns `None` when the key is not registered.
pub fn strategy(
    name: &str,
    question: &Question,
    answer: &AnswerValue,
    ctx: &ScoringContext,
) -> Option<f64> {
    let date = ctx.reference_date;
    match name {
        "recall_match" => Some(element_match(question, answer)),
        "multi_step" => Some(element_match(question, answer)),
        "drawing_elements" => Some(element_match(question, answer)),
        "clock_drawing" => Some(element_match(question, answer)),
        "orientation_year" => Some(point_if(question, answer_is_year(answer, date))),
        "orientation_season" => Some(point_if(question, answer_is_season(answer, date))),
        "orientation_month" => Some(point_if(question, answer_is_month(answer, date))),
        "orientation_weekday" => Some(point_if(question, answer_is_weekday(answer, date))),
        "orientation_day" => Some(point_if(question, answer_is_day(answer, date))),
        _ => None,
    }
}

fn cap(question: &Question, score: f64) -> f64 {
    match question.max_points {
        Some(max) => score.min(max),
        None => score,
    }
}

fn point_if(question: &Question, correct: bool) -> f64 {
    if correct {
        question.max_points.unwrap_or(1.0)
    } else {
        0.0
    }
}

/// Count correct positions in the 5-step subtraction sequence.
fn serial_sevens(question: &Question, answer: &AnswerValue) -> f64 {
    let Some(items) = answer.as_items() else {
        return 0.0;
    };
    let correct = items
        .iter()
        .zip(&question.expected)
        .filter(|(given, expected)| given.trim() == expected.as_str())
        .count();
    cap(question, correct as f64)
}

/// Full credit when the answer reaches the declared word count, else 0.
fn word_count(question: &Question, answer: &AnswerValue) -> f64 {
    let count = match answer {
        AnswerValue::Text(text) => text.split_whitespace().count(),
        AnswerValue::Items(items) => items.len(),
        _ => 0,
    };
    let threshold = question.threshold.unwrap_or(1) as usize;
    point_if(question, count >= threshold)
}

/// Order-independent, case-insensitive intersection of the answered items
/// with the question's expected list. Duplicates in the answer count once.
/// Shared by recall, multi-step instruction, and drawing-element scoring.
fn element_match(question: &Question, answer: &AnswerValue) -> f64 {
    let Some(items) = answer.as_items() else {
        return 0.0;
    };
    let matched = question
        .expected
        .iter()
        .filter(|expected| {
            let target = normalize(expected, false);
            items.iter().any(|item| normalize(item, false) == target)
        })
        .count();
    cap(question, matched as f64)
}

fn answer_is_year(answer: &AnswerValue, date: Date) -> bool {
    answer.as_number() == Some(f64::from(date.year()))
}

fn answer_is_month(answer: &AnswerValue, date: Date) -> bool {
    if answer.as_number() == Some(f64::from(date.month())) {
        return true;
    }
    match answer.as_text() {
        Some(text) => normalize(text, false) == month_name(date.month()),
        None => false,
    }
}

/// Day of month, with the conventional ±1 day tolerance. The neighboring
/// days are taken from real calendar arithmetic so month boundaries work.
fn answer_is_day(answer: &AnswerValue, date: Date) -> bool {
    let Some(n) = answer.as_number() else {
        return false;
    };
    let mut accepted = vec![f64::from(date.day())];
    if let Ok(prev) = date.yesterday() {
        accepted.push(f64::from(prev.day()));
    }
    if let Ok(next) = date.tomorrow() {
        accepted.push(f64::from(next.day()));
    }
    accepted.contains(&n)
}

fn answer_is_weekday(answer: &AnswerValue, date: Date) -> bool {
    match answer.as_text() {
        Some(text) => normalize(text, false) == weekday_name(date.weekday()),
        None => false,
    }
}

/// Meteorological seasons, northern hemisphere. "fall" and "autumn" both
/// count.
fn answer_is_season(answer: &AnswerValue, date: Date) -> bool {
    let Some(text) = answer.as_text() else {
        return false;
    };
    let given = normalize(text, false);
    match date.month() {
        12 | 1 | 2 => given == "winter",
        3..=5 => given == "spring",
        6..=8 => given == "summer",
        _ => given == "fall" || given == "autumn",
    }
}

fn month_name(month: i8) -> &'static str {
    match month {
        1 => "january",
        2 => "february",
        3 => "march",
        4 => "april",
        5 => "may",
        6 => "june",
        7 => "july",
        8 => "august",
        9 => "september",
        10 => "october",
        11 => "november",
        _ => "december",
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "monday",
        Weekday::Tuesday => "tuesday",
        Weekday::Wednesday => "wednesday",
        Weekday::Thursday => "thursday",
        Weekday::Friday => "friday",
        Weekday::Saturday => "saturday",
        Weekday::Sunday => "sunday",
    }
}
