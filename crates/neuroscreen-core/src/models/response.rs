use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The raw value a participant (or informant) supplied for one question.
///
/// Untagged so that plain JSON numbers, strings, and booleans coming from the
/// session layer deserialize without a wrapper object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
    Bool(bool),
    /// Word lists for recall tasks and completed-step lists for
    /// multi-step instruction tasks.
    Items(Vec<String>),
    /// Placeholder payload for drawing tasks: the session layer reports
    /// which expected elements it detected.
    Drawing { completed_elements: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Response {
    pub question_id: String,
    pub answer: AnswerValue,
    pub answered_at: jiff::Timestamp,
}

impl AnswerValue {
    /// Numeric view of the answer, if one exists. Booleans coerce to 0/1.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            AnswerValue::Text(t) => t.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_items(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Items(items) => Some(items),
            AnswerValue::Drawing { completed_elements } => Some(completed_elements),
            _ => None,
        }
    }
}
