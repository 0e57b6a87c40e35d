use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WarningCode {
    UnknownQuestion,
    UnrecognizedRule,
    UnknownSection,
}

/// A non-fatal data-quality issue found while scoring. Returned alongside
/// the result so callers can surface it instead of losing it in a log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringWarning {
    pub code: WarningCode,
    pub question_id: Option<String>,
    pub message: String,
}
