//! Per-response scoring: one handler per `ScoringRule` variant.

use neuroscreen_core::models::context::ScoringContext;
use neuroscreen_core::models::response::{AnswerValue, Response};
use neuroscreen_core::models::warning::{ScoringWarning, WarningCode};
use neuroscreen_instruments::definition::{LookupEntry, Question, ScoringRule};

use crate::strategies;

/// Score one response against its question. Never fails: an unrecognized
/// formula or strategy key contributes 0 and produces a warning so that
/// in-progress sessions remain scoreable.
pub fn score_response(
    question: &Question,
    response: &Response,
    ctx: &ScoringContext,
) -> (f64, Option<ScoringWarning>) {
    match &question.rule {
        ScoringRule::Direct => (score_direct(question, &response.answer), None),
        ScoringRule::Lookup {
            table,
            accent_insensitive,
        } => (
            score_lookup(table, *accent_insensitive, &response.answer),
            None,
        ),
        ScoringRule::Calculated { formula } => {
            match strategies::formula(formula, question, &response.answer) {
                Some(score) => (score, None),
                None => (0.0, Some(unrecognized(question, "formula", formula))),
            }
        }
        ScoringRule::Custom { strategy } => {
            match strategies::strategy(strategy, question, &response.answer, ctx) {
                Some(score) => (score, None),
                None => (0.0, Some(unrecognized(question, "strategy", strategy))),
            }
        }
    }
}

fn unrecognized(question: &Question, kind: &str, key: &str) -> ScoringWarning {
    ScoringWarning {
        code: WarningCode::UnrecognizedRule,
        question_id: Some(question.id.clone()),
        message: format!("unrecognized {kind} '{key}' for question '{}'", question.id),
    }
}

/// The answer selects an option by value or by label; unmatched scores 0.
fn score_direct(question: &Question, answer: &AnswerValue) -> f64 {
    if let Some(n) = answer.as_number()
        && let Some(option) = question.options.iter().find(|o| o.value == n)
    {
        return option.value;
    }
    if let Some(text) = answer.as_text() {
        let given = normalize(text, false);
        if let Some(option) = question
            .options
            .iter()
            .find(|o| normalize(&o.label, false) == given)
        {
            return option.value;
        }
    }
    0.0
}

fn score_lookup(
    table: &[LookupEntry],
    accent_insensitive: bool,
    answer: &AnswerValue,
) -> f64 {
    let Some(text) = answer.as_text() else {
        return 0.0;
    };
    let given = normalize(text, accent_insensitive);
    table
        .iter()
        .find(|entry| normalize(&entry.key, accent_insensitive) == given)
        .map(|entry| entry.points)
        .unwrap_or(0.0)
}

/// Case-fold, trim, drop punctuation, collapse whitespace. Accent folding
/// is opt-in per question; it is never applied implicitly.
pub fn normalize(text: &str, accent_insensitive: bool) -> String {
    let lowered = text.to_lowercase();
    let source: String = if accent_insensitive {
        lowered.chars().map(fold_accent).collect()
    } else {
        lowered
    };
    source
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        _ => c,
    }
}
