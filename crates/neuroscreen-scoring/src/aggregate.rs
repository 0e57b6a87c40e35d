//! Section aggregation: per-response scores → section scores → raw and
//! adjusted instrument scores.

use tracing::warn;

use neuroscreen_core::models::context::ScoringContext;
use neuroscreen_core::models::response::Response;
use neuroscreen_core::models::result::SectionScore;
use neuroscreen_core::models::warning::{ScoringWarning, WarningCode};
use neuroscreen_instruments::definition::{
    Aggregation, InstrumentDefinition, Question, ScoreAdjustment,
};

use crate::scorer;

#[derive(Debug, Clone)]
pub struct Aggregated {
    pub raw_score: f64,
    pub adjusted_score: f64,
    pub section_scores: Vec<SectionScore>,
    /// Distinct known questions that were answered.
    pub answered: u32,
}

/// Score every response, bucket into the instrument's declared sections,
/// sum (weighted where declared), apply score adjustments, clamp to bounds.
/// Duplicate responses for one question are ignored after the first.
///
/// Responses referencing unknown questions are skipped, not fatal; every
/// skip is recorded as a warning and logged. An empty response list yields
/// a valid zero score.
pub fn aggregate(
    def: &InstrumentDefinition,
    responses: &[Response],
    ctx: &ScoringContext,
    warnings: &mut Vec<ScoringWarning>,
) -> Aggregated {
    // Declared sections always appear in the output, answered or not.
    let mut sections: Vec<SectionScore> = def
        .scoring
        .sections
        .iter()
        .map(|s| SectionScore {
            section_id: s.id.clone(),
            score: 0.0,
            max_score: s.max_score,
        })
        .collect();

    let mut answered: Vec<&str> = Vec::new();

    for response in responses {
        let Some(question) = def.question(&response.question_id) else {
            warn!(
                instrument = %def.id,
                question_id = %response.question_id,
                "response references unknown question; skipping"
            );
            warnings.push(ScoringWarning {
                code: WarningCode::UnknownQuestion,
                question_id: Some(response.question_id.clone()),
                message: format!(
                    "response references unknown question '{}' for instrument '{}'",
                    response.question_id, def.id
                ),
            });
            continue;
        };

        // One contribution per question: a re-answered question keeps its
        // first score instead of accumulating past the section maximum.
        if answered.contains(&question.id.as_str()) {
            continue;
        }

        let (score, warning) = scorer::score_response(question, response, ctx);
        if let Some(warning) = warning {
            warn!(instrument = %def.id, question_id = %question.id, message = %warning.message);
            warnings.push(warning);
        }

        let Some(section_id) = assign_section(def, question) else {
            warnings.push(ScoringWarning {
                code: WarningCode::UnknownSection,
                question_id: Some(question.id.clone()),
                message: format!(
                    "question '{}' matches no declared section of '{}'",
                    question.id, def.id
                ),
            });
            continue;
        };

        if let Some(section) = sections.iter_mut().find(|s| s.section_id == section_id) {
            section.score += score;
        }
        answered.push(&question.id);
    }

    let raw_score = match def.scoring.aggregation {
        Aggregation::Sum => sections.iter().map(|s| s.score).sum(),
        Aggregation::WeightedSum => def
            .scoring
            .sections
            .iter()
            .zip(&sections)
            .map(|(spec, scored)| scored.score * spec.weight)
            .sum(),
    };

    // Score adjustments only apply once something was answered; an empty
    // response set stays at zero.
    let adjusted = if answered.is_empty() {
        raw_score
    } else {
        apply_adjustments(def, raw_score, ctx)
    };
    let adjusted_score = adjusted.clamp(def.scoring.min_score, def.scoring.max_score);

    Aggregated {
        raw_score,
        adjusted_score,
        section_scores: sections,
        answered: answered.len() as u32,
    }
}

/// Explicit section id wins; otherwise fall back to the declared section
/// question-id prefixes.
fn assign_section(def: &InstrumentDefinition, question: &Question) -> Option<String> {
    if let Some(section) = &question.section {
        return Some(section.clone());
    }
    def.scoring
        .sections
        .iter()
        .find(|s| {
            s.question_prefix
                .as_deref()
                .is_some_and(|prefix| question.id.starts_with(prefix))
        })
        .map(|s| s.id.clone())
}

fn apply_adjustments(def: &InstrumentDefinition, raw_score: f64, ctx: &ScoringContext) -> f64 {
    let mut score = raw_score;
    for adjustment in &def.scoring.adjustments {
        match adjustment {
            ScoreAdjustment::EducationYears { max_years, delta } => {
                if ctx.profile.years_of_education <= *max_years {
                    score += delta;
                }
            }
        }
    }
    score
}
