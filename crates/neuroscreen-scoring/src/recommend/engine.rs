//! Recommendation generation: emergency detection first, then
//! instrument-specific rules, then lifestyle guidance, then a
//! dedupe-and-prioritize merge.

use std::cmp::Reverse;
use std::collections::HashSet;

use neuroscreen_core::models::profile::UserProfile;
use neuroscreen_core::models::recommendation::Recommendation;
use neuroscreen_core::models::response::Response;
use neuroscreen_core::models::result::{FactorPolarity, RiskAssessment, RiskCategory};
use neuroscreen_instruments::definition::InstrumentDefinition;

use super::catalog::{EmergencyTrigger, LifestyleKind, RecommendationCatalog};

/// Raw score below this on the second cognitive screen forces escalation.
const SEVERE_COGNITIVE_CUTOFF: f64 = 10.0;
/// PHQ-9 raw score at or above this is severe depression.
const SEVERE_DEPRESSION_CUTOFF: f64 = 20.0;
/// Informant-interview score at or above this warrants a dementia evaluation.
const AD8_EVALUATION_CUTOFF: f64 = 2.0;
/// Social-engagement guidance is added past this age regardless of result.
const SOCIAL_ENGAGEMENT_AGE: u32 = 70;

pub fn generate(
    catalog: &RecommendationCatalog,
    def: &InstrumentDefinition,
    raw_score: f64,
    risk: &RiskAssessment,
    responses: &[Response],
    profile: &UserProfile,
    answered: u32,
) -> (Vec<Recommendation>, Vec<EmergencyTrigger>) {
    // No answers means nothing to escalate; a zero score is not impairment.
    let emergencies = if answered == 0 {
        Vec::new()
    } else {
        detect_emergencies(def, raw_score, risk, responses)
    };

    let mut collected = Vec::new();
    for trigger in &emergencies {
        collected.extend(catalog.emergency(*trigger, &def.id));
    }

    collected.extend(instrument_rules(catalog, def, raw_score, risk));
    collected.extend(lifestyle_rules(catalog, def, risk, profile));

    (merge(collected), emergencies)
}

/// Evaluated before anything else; any match injects urgent, immediate
/// medical guidance regardless of the overall category.
fn detect_emergencies(
    def: &InstrumentDefinition,
    raw_score: f64,
    risk: &RiskAssessment,
    responses: &[Response],
) -> Vec<EmergencyTrigger> {
    let mut triggers = Vec::new();

    if def.id == "phq9" {
        let ideation = responses.iter().any(|r| {
            r.question_id == "phq9_q9" && r.answer.as_number().is_some_and(|n| n > 0.0)
        });
        if ideation {
            triggers.push(EmergencyTrigger::SuicidalIdeation);
        }
    }

    if def.id == "moca" && raw_score < SEVERE_COGNITIVE_CUTOFF {
        triggers.push(EmergencyTrigger::SevereCognitiveImpairment);
    }

    // The leading base-mapping factor is not a demographic factor; only the
    // applied deltas count toward compound risk.
    let adverse = risk
        .factors
        .iter()
        .skip(1)
        .filter(|f| f.polarity == FactorPolarity::Adverse)
        .count();
    if adverse >= 3 && risk.risk_category == RiskCategory::High {
        triggers.push(EmergencyTrigger::CompoundRisk);
    }

    triggers
}

fn instrument_rules(
    catalog: &RecommendationCatalog,
    def: &InstrumentDefinition,
    raw_score: f64,
    risk: &RiskAssessment,
) -> Vec<Recommendation> {
    let mut recs = catalog.medical(&def.id, risk.risk_category);

    if def.id == "phq9" && raw_score >= SEVERE_DEPRESSION_CUTOFF {
        recs.push(catalog.urgent_psychiatric_care(&def.id));
    }
    // Score-based, not category-based: validated AD8 cutoff.
    if def.id == "ad8"
        && raw_score >= AD8_EVALUATION_CUTOFF
        && risk.risk_category == RiskCategory::Low
    {
        recs.extend(catalog.medical(&def.id, RiskCategory::Moderate));
    }

    recs
}

fn lifestyle_rules(
    catalog: &RecommendationCatalog,
    def: &InstrumentDefinition,
    risk: &RiskAssessment,
    profile: &UserProfile,
) -> Vec<Recommendation> {
    let mut kinds = vec![
        LifestyleKind::Exercise,
        LifestyleKind::Nutrition,
        LifestyleKind::Sleep,
    ];
    if matches!(def.id.as_str(), "mmse" | "moca") {
        kinds.push(LifestyleKind::CognitiveStimulation);
    }
    if def.id == "phq9"
        || risk.risk_category == RiskCategory::High
        || profile.age > SOCIAL_ENGAGEMENT_AGE
    {
        kinds.push(LifestyleKind::SocialEngagement);
    }

    kinds
        .into_iter()
        .map(|kind| catalog.lifestyle(kind, &def.id, risk.risk_category))
        .collect()
}

/// Deduplicate by id (first occurrence wins), then order by descending
/// priority with ascending follow-up interval as the tie-break.
fn merge(collected: Vec<Recommendation>) -> Vec<Recommendation> {
    let mut seen = HashSet::new();
    let mut merged: Vec<Recommendation> = collected
        .into_iter()
        .filter(|rec| seen.insert(rec.id.clone()))
        .collect();
    merged.sort_by_key(|rec| (Reverse(rec.priority), rec.follow_up_days));
    merged
}
