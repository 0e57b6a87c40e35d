use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::profile::UserProfile;

/// Everything a scoring call needs beyond the responses themselves.
///
/// The reference date/instant are injected by the caller so that
/// temporally-situated answers (date orientation items) and result
/// timestamps are deterministic — the engine never reads the wall clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringContext {
    pub profile: UserProfile,
    /// Civil date the session took place, for date-orientation scoring.
    pub reference_date: jiff::civil::Date,
    /// Instant stamped into the produced assessment.
    pub reference_instant: jiff::Timestamp,
}
