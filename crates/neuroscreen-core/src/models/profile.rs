use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Female,
    Male,
    Other,
}

/// Demographic context for scoring. Read-only input; the engine never
/// stores or mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    pub age: u32,
    pub years_of_education: u32,
    pub gender: Option<Gender>,
    /// BCP 47 language tag, e.g. "en" or "es".
    pub language: String,
}
