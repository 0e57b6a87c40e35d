//! Score → risk mapping: base band interpolation (Layer A) plus additive
//! demographic adjustment (Layer B), with a per-instrument confidence
//! interval. Every applied delta is recorded as a named factor.

use neuroscreen_core::models::context::ScoringContext;
use neuroscreen_core::models::result::{
    ConfidenceInterval, FactorPolarity, RiskAssessment, RiskCategory, RiskFactor,
};
use neuroscreen_instruments::definition::{InstrumentDefinition, RiskAlgorithm, RiskBand};

use crate::error::ScoringError;

pub fn calculate_risk(
    def: &InstrumentDefinition,
    raw_score: f64,
    adjusted_score: f64,
    ctx: &ScoringContext,
    answered: u32,
) -> Result<RiskAssessment, ScoringError> {
    // An empty response set is a valid, low-risk result: a zero score on a
    // cognitive screen means "nothing assessed yet", not severe impairment.
    if answered == 0 {
        return Ok(empty_assessment(def, ctx));
    }

    let base_pct = base_percentage(def, adjusted_score)?;

    let mut factors = vec![RiskFactor {
        label: "base_score".to_string(),
        polarity: FactorPolarity::Adverse,
        weight: base_pct,
        description: format!(
            "{} score {adjusted_score} maps to {base_pct:.1}% under the {} algorithm",
            def.name,
            def.risk.algorithm.name(),
        ),
    }];

    let mut pct = base_pct;
    for factor in demographic_deltas(def, ctx) {
        pct += factor.signed_delta;
        factors.push(factor.into_risk_factor());
    }
    let pct = pct.clamp(0.0, 100.0);

    let category = categorize(def, pct);
    let confidence_interval = confidence(def, pct, ctx);

    Ok(RiskAssessment {
        instrument_id: def.id.clone(),
        raw_score,
        adjusted_score,
        risk_percentage: pct,
        risk_category: category,
        confidence_interval,
        factors,
        algorithm: def.risk.algorithm.name().to_string(),
        assessed_at: ctx.reference_instant,
    })
}

fn empty_assessment(def: &InstrumentDefinition, ctx: &ScoringContext) -> RiskAssessment {
    RiskAssessment {
        instrument_id: def.id.clone(),
        raw_score: 0.0,
        adjusted_score: 0.0,
        risk_percentage: 0.0,
        risk_category: RiskCategory::Low,
        confidence_interval: ConfidenceInterval {
            lower: 0.0,
            upper: 0.0,
        },
        factors: Vec::new(),
        algorithm: def.risk.algorithm.name().to_string(),
        assessed_at: ctx.reference_instant,
    }
}

/// Layer A. Threshold-style algorithms interpolate linearly inside the band
/// that contains the score; `linear` spans the whole score range between the
/// outermost band percentages. Custom algorithms resolve through a registry;
/// none ship today, so an unknown key is an error rather than a fallback.
fn base_percentage(def: &InstrumentDefinition, score: f64) -> Result<f64, ScoringError> {
    match &def.risk.algorithm {
        RiskAlgorithm::Threshold | RiskAlgorithm::WeightedThreshold => {
            Ok(band_percentage(&def.risk.bands, score))
        }
        RiskAlgorithm::Linear => {
            let (first, last) = match (def.risk.bands.first(), def.risk.bands.last()) {
                (Some(first), Some(last)) => (first, last),
                _ => return Ok(0.0),
            };
            let min = def.scoring.min_score;
            let max = def.scoring.max_score;
            if max <= min {
                return Ok(first.pct_at_lo);
            }
            let t = ((score - min) / (max - min)).clamp(0.0, 1.0);
            Ok(first.pct_at_lo + t * (last.pct_at_hi - first.pct_at_lo))
        }
        RiskAlgorithm::Custom(name) => Err(ScoringError::UnknownRiskAlgorithm(name.clone())),
    }
}

/// Piecewise-linear interpolation inside the containing band. Bands are
/// ordered ascending by score; a score below the first band clamps to it
/// and one above the last clamps likewise.
fn band_percentage(bands: &[RiskBand], score: f64) -> f64 {
    let Some(band) = containing_band(bands, score) else {
        return 0.0;
    };
    if band.score_hi <= band.score_lo {
        return band.pct_at_lo;
    }
    let t = ((score - band.score_lo) / (band.score_hi - band.score_lo)).clamp(0.0, 1.0);
    band.pct_at_lo + t * (band.pct_at_hi - band.pct_at_lo)
}

fn containing_band(bands: &[RiskBand], score: f64) -> Option<&RiskBand> {
    bands
        .iter()
        .find(|b| score <= b.score_hi)
        .or_else(|| bands.last())
}

/// Category from the adjusted percentage, per instrument cut points.
fn categorize(def: &InstrumentDefinition, pct: f64) -> RiskCategory {
    if pct <= def.cutpoints.low_max {
        RiskCategory::Low
    } else if pct <= def.cutpoints.moderate_max {
        RiskCategory::Moderate
    } else {
        RiskCategory::High
    }
}

struct AppliedDelta {
    label: String,
    signed_delta: f64,
    description: String,
}

impl AppliedDelta {
    fn into_risk_factor(self) -> RiskFactor {
        RiskFactor {
            label: self.label,
            polarity: if self.signed_delta < 0.0 {
                FactorPolarity::Protective
            } else {
                FactorPolarity::Adverse
            },
            weight: self.signed_delta.abs(),
            description: self.description,
        }
    }
}

/// Layer B. First matching age band, first matching education band, then
/// any matching gender delta, in that order.
fn demographic_deltas(def: &InstrumentDefinition, ctx: &ScoringContext) -> Vec<AppliedDelta> {
    let profile = &ctx.profile;
    let mut applied = Vec::new();

    if let Some(band) = def
        .demographics
        .age_bands
        .iter()
        .find(|b| profile.age >= b.min_age && profile.age <= b.max_age)
    {
        applied.push(AppliedDelta {
            label: band.label.clone(),
            signed_delta: band.delta,
            description: format!(
                "age {} falls in band {}-{} ({:+.1} points)",
                profile.age, band.min_age, band.max_age, band.delta
            ),
        });
    }

    if let Some(band) = def.demographics.education_bands.iter().find(|b| {
        profile.years_of_education >= b.min_years && profile.years_of_education <= b.max_years
    }) {
        applied.push(AppliedDelta {
            label: band.label.clone(),
            signed_delta: band.delta,
            description: format!(
                "{} years of education falls in band {}-{} ({:+.1} points)",
                profile.years_of_education, band.min_years, band.max_years, band.delta
            ),
        });
    }

    if let Some(gender) = profile.gender
        && let Some(delta) = def
            .demographics
            .gender_deltas
            .iter()
            .find(|d| d.gender == gender)
    {
        applied.push(AppliedDelta {
            label: delta.label.clone(),
            signed_delta: delta.delta,
            description: format!("gender-specific prevalence delta ({:+.1} points)", delta.delta),
        });
    }

    applied
}

/// Fixed ± half width, widened once for age and once for education when
/// either falls outside the instrument's central range.
fn confidence(def: &InstrumentDefinition, pct: f64, ctx: &ScoringContext) -> ConfidenceInterval {
    let cfg = &def.confidence;
    let profile = &ctx.profile;

    let mut half = cfg.half_width;
    if profile.age < cfg.central_age_min || profile.age > cfg.central_age_max {
        half += cfg.widen_by;
    }
    if profile.years_of_education < cfg.central_education_min
        || profile.years_of_education > cfg.central_education_max
    {
        half += cfg.widen_by;
    }

    ConfidenceInterval {
        lower: (pct - half).clamp(0.0, 100.0),
        upper: (pct + half).clamp(0.0, 100.0),
    }
}
