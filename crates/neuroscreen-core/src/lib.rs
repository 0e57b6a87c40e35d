//! neuroscreen-core
//!
//! Pure domain types for the screening engine: responses, profiles, scores,
//! risk assessments, and recommendations. No I/O and no clock reads — this is
//! the shared vocabulary of the neuroscreen system.

pub mod error;
pub mod models;
