pub mod ad8;
pub mod mmse;
pub mod moca;
pub mod phq9;
pub mod pss;

use crate::definition::{Question, QuestionOption, ScoringRule};

/// Build a direct-scored question from `(value, label)` option pairs.
pub(crate) fn direct(id: &str, section: Option<&str>, options: &[(f64, &str)]) -> Question {
    Question {
        id: id.to_string(),
        section: section.map(str::to_string),
        rule: ScoringRule::Direct,
        options: options
            .iter()
            .map(|(value, label)| QuestionOption {
                value: *value,
                label: (*label).to_string(),
            })
            .collect(),
        expected: Vec::new(),
        max_points: None,
        threshold: None,
    }
}

/// Build a custom-strategy question with its reference data and cap.
pub(crate) fn custom(
    id: &str,
    section: Option<&str>,
    strategy: &str,
    expected: &[&str],
    max_points: f64,
) -> Question {
    Question {
        id: id.to_string(),
        section: section.map(str::to_string),
        rule: ScoringRule::Custom {
            strategy: strategy.to_string(),
        },
        options: Vec::new(),
        expected: expected.iter().map(|e| (*e).to_string()).collect(),
        max_points: Some(max_points),
        threshold: None,
    }
}

/// A 1-point examiner-marked item (correct/incorrect).
pub(crate) fn correct_item(id: &str, section: Option<&str>) -> Question {
    direct(id, section, &[(1.0, "Correct"), (0.0, "Incorrect")])
}
