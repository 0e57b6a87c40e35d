//! Static recommendation templates: per instrument × risk category medical
//! guidance, emergency escalations, and lifestyle guidance by category.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use neuroscreen_core::models::recommendation::{
    Priority, Recommendation, RecommendationCategory,
};
use neuroscreen_core::models::result::RiskCategory;

/// Instrument-specific conditions that force urgent escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EmergencyTrigger {
    /// Depression scale self-harm item answered above zero.
    SuicidalIdeation,
    /// Second cognitive screen raw score below 10.
    SevereCognitiveImpairment,
    /// Three or more adverse demographic factors on a high-risk result.
    CompoundRisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifestyleKind {
    Exercise,
    Nutrition,
    Sleep,
    CognitiveStimulation,
    SocialEngagement,
}

/// Read-only template store, constructed once and injected into the engine.
#[derive(Debug, Clone, Default)]
pub struct RecommendationCatalog;

impl RecommendationCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn emergency(&self, trigger: EmergencyTrigger, instrument_id: &str) -> Vec<Recommendation> {
        match trigger {
            EmergencyTrigger::SuicidalIdeation => vec![
                template(
                    "emergency_suicide_risk",
                    instrument_id,
                    RiskCategory::High,
                    RecommendationCategory::Immediate,
                    Priority::Urgent,
                    "Immediate safety assessment",
                    "The screening indicates thoughts of self-harm. A same-day \
                     clinical safety assessment is required.",
                    &[
                        "Contact the treating clinician or crisis line today",
                        "Do not leave the person alone if acute risk is suspected",
                        "Remove access to means of self-harm where possible",
                    ],
                    Some(&["988 Suicide & Crisis Lifeline"]),
                    0,
                ),
                template(
                    "emergency_mental_health_referral",
                    instrument_id,
                    RiskCategory::High,
                    RecommendationCategory::Immediate,
                    Priority::Urgent,
                    "Urgent mental health referral",
                    "Arrange an urgent psychiatric evaluation to assess risk and \
                     initiate treatment.",
                    &["Schedule a psychiatric evaluation within 24 hours"],
                    None,
                    1,
                ),
            ],
            EmergencyTrigger::SevereCognitiveImpairment => vec![template(
                "emergency_severe_cognitive_impairment",
                instrument_id,
                RiskCategory::High,
                RecommendationCategory::Immediate,
                Priority::Urgent,
                "Urgent cognitive evaluation",
                "The screening score indicates severe cognitive impairment. An \
                 urgent neurological work-up is required to rule out reversible \
                 causes.",
                &[
                    "Refer to neurology within 48 hours",
                    "Review medications for cognitive side effects",
                    "Assess safety of current living situation",
                ],
                None,
                1,
            )],
            EmergencyTrigger::CompoundRisk => vec![template(
                "emergency_compound_risk",
                instrument_id,
                RiskCategory::High,
                RecommendationCategory::Immediate,
                Priority::Urgent,
                "Comprehensive clinical review",
                "Multiple adverse factors combined with a high-risk screening \
                 result warrant a prompt comprehensive clinical review.",
                &["Arrange a comprehensive geriatric or specialist review"],
                None,
                3,
            )],
        }
    }

    /// Medical guidance for one instrument at one risk level.
    pub fn medical(&self, instrument_id: &str, level: RiskCategory) -> Vec<Recommendation> {
        match (instrument_id, level) {
            ("mmse", RiskCategory::Low) => vec![template(
                "mmse_low_routine_monitoring",
                instrument_id,
                level,
                RecommendationCategory::Monitoring,
                Priority::Low,
                "Routine cognitive monitoring",
                "Screening is within the normal range. Repeat at the next \
                 annual visit.",
                &["Repeat cognitive screening in 12 months"],
                None,
                365,
            )],
            ("mmse", RiskCategory::Moderate) => vec![
                template(
                    "mmse_moderate_clinical_followup",
                    instrument_id,
                    level,
                    RecommendationCategory::Medical,
                    Priority::Medium,
                    "Clinical follow-up for mild impairment",
                    "The score suggests mild cognitive impairment. A clinical \
                     follow-up with history and laboratory screening is advised.",
                    &[
                        "Schedule a primary-care cognitive work-up",
                        "Screen for depression, B12 deficiency, and thyroid disease",
                    ],
                    None,
                    60,
                ),
                template(
                    "mmse_moderate_repeat_screen",
                    instrument_id,
                    level,
                    RecommendationCategory::Monitoring,
                    Priority::Medium,
                    "Repeat screening in six months",
                    "Track trajectory with a repeat screen.",
                    &["Repeat cognitive screening in 6 months"],
                    None,
                    180,
                ),
            ],
            ("mmse", RiskCategory::High) => vec![template(
                "mmse_high_neurology_referral",
                instrument_id,
                level,
                RecommendationCategory::Medical,
                Priority::High,
                "Neurology referral",
                "The score indicates significant impairment. Refer for a full \
                 dementia work-up including imaging.",
                &[
                    "Refer to a memory clinic or neurologist",
                    "Obtain structural brain imaging",
                    "Involve family in care planning",
                ],
                None,
                14,
            )],
            ("phq9", RiskCategory::Low) => vec![template(
                "phq9_low_watchful_waiting",
                instrument_id,
                level,
                RecommendationCategory::Monitoring,
                Priority::Low,
                "Watchful waiting",
                "Minimal depressive symptoms. Re-screen if symptoms persist or \
                 worsen.",
                &["Repeat the questionnaire in 3 months or sooner if symptoms change"],
                None,
                90,
            )],
            ("phq9", RiskCategory::Moderate) => vec![template(
                "phq9_moderate_psychotherapy",
                instrument_id,
                level,
                RecommendationCategory::Medical,
                Priority::Medium,
                "Structured psychotherapy",
                "Moderate depressive symptoms. Evidence-based psychotherapy is \
                 the recommended first step.",
                &[
                    "Refer for cognitive behavioral therapy",
                    "Reassess symptoms in 4 weeks",
                ],
                None,
                28,
            )],
            ("phq9", RiskCategory::High) => vec![template(
                "phq9_high_psychiatric_care",
                instrument_id,
                level,
                RecommendationCategory::Medical,
                Priority::High,
                "Psychiatric care",
                "Moderately severe to severe depressive symptoms. Combined \
                 pharmacotherapy and psychotherapy should be considered.",
                &[
                    "Refer to psychiatry for medication evaluation",
                    "Begin or continue psychotherapy",
                    "Reassess within 2 weeks",
                ],
                None,
                14,
            )],
            ("moca", RiskCategory::Low) => vec![template(
                "moca_low_routine_monitoring",
                instrument_id,
                level,
                RecommendationCategory::Monitoring,
                Priority::Low,
                "Routine cognitive monitoring",
                "Screening is within the normal range. Repeat at the next \
                 annual visit.",
                &["Repeat cognitive screening in 12 months"],
                None,
                365,
            )],
            ("moca", RiskCategory::Moderate) => vec![template(
                "moca_moderate_clinical_followup",
                instrument_id,
                level,
                RecommendationCategory::Medical,
                Priority::Medium,
                "Clinical follow-up for mild impairment",
                "The score suggests mild cognitive impairment. A clinical \
                 follow-up with domain-level review is advised.",
                &[
                    "Review the per-domain profile with a clinician",
                    "Screen for reversible contributors",
                ],
                None,
                60,
            )],
            ("moca", RiskCategory::High) => vec![template(
                "moca_high_neurology_referral",
                instrument_id,
                level,
                RecommendationCategory::Medical,
                Priority::High,
                "Neurology referral",
                "The score indicates significant impairment. Refer for a full \
                 dementia work-up.",
                &[
                    "Refer to a memory clinic or neurologist",
                    "Obtain structural brain imaging",
                ],
                None,
                14,
            )],
            ("ad8", RiskCategory::Low) => vec![template(
                "ad8_low_reassure",
                instrument_id,
                level,
                RecommendationCategory::Educational,
                Priority::Low,
                "No informant-reported change",
                "The informant reports no meaningful change. No action needed \
                 beyond routine care.",
                &["Repeat the interview in 12 months"],
                None,
                365,
            )],
            ("ad8", RiskCategory::Moderate | RiskCategory::High) => vec![template(
                "ad8_dementia_evaluation",
                instrument_id,
                level,
                RecommendationCategory::Medical,
                Priority::High,
                "Dementia evaluation",
                "Informant-reported change at this level is associated with \
                 cognitive impairment. A formal dementia evaluation is \
                 recommended.",
                &[
                    "Schedule a formal cognitive evaluation",
                    "Corroborate the informant report with direct testing",
                ],
                None,
                30,
            )],
            ("pss", RiskCategory::Low) => vec![template(
                "pss_low_monitoring",
                instrument_id,
                level,
                RecommendationCategory::Monitoring,
                Priority::Low,
                "Symptom monitoring",
                "Reported symptoms are minimal. Re-screen if motor symptoms \
                 emerge.",
                &["Repeat the symptom screen in 12 months"],
                None,
                365,
            )],
            ("pss", RiskCategory::Moderate) => vec![template(
                "pss_moderate_movement_review",
                instrument_id,
                level,
                RecommendationCategory::Medical,
                Priority::Medium,
                "Movement-symptom review",
                "Symptom burden is elevated. A clinical review of motor and \
                 non-motor symptoms is advised.",
                &[
                    "Review symptoms with the primary clinician",
                    "Track symptom progression monthly",
                ],
                None,
                30,
            )],
            ("pss", RiskCategory::High) => vec![template(
                "pss_high_neurologist_referral",
                instrument_id,
                level,
                RecommendationCategory::Medical,
                Priority::High,
                "Movement-disorder specialist referral",
                "The weighted symptom burden is high. Referral to a \
                 movement-disorder neurologist is recommended.",
                &[
                    "Refer to a movement-disorder specialist",
                    "Document symptom onset and progression for the visit",
                ],
                None,
                14,
            )],
            _ => Vec::new(),
        }
    }

    /// Score-threshold rule for severe depression, above and beyond the
    /// category-level guidance.
    pub fn urgent_psychiatric_care(&self, instrument_id: &str) -> Recommendation {
        template(
            "phq9_severe_psychiatric_care",
            instrument_id,
            RiskCategory::High,
            RecommendationCategory::Medical,
            Priority::Urgent,
            "Urgent psychiatric care",
            "Severe depressive symptoms. Same-week psychiatric evaluation and \
             treatment initiation are recommended.",
            &[
                "Arrange a psychiatric appointment within 7 days",
                "Screen for safety concerns at every contact",
            ],
            None,
            7,
        )
    }

    /// Lifestyle guidance, tagged with the instrument and risk level of the
    /// result it accompanies.
    pub fn lifestyle(
        &self,
        kind: LifestyleKind,
        instrument_id: &str,
        level: RiskCategory,
    ) -> Recommendation {
        match kind {
            LifestyleKind::Exercise => template(
                "lifestyle_exercise",
                instrument_id,
                level,
                RecommendationCategory::Lifestyle,
                Priority::Medium,
                "Regular physical activity",
                "Aerobic exercise supports both cognitive and mood outcomes.",
                &["Aim for 150 minutes of moderate aerobic activity per week"],
                None,
                90,
            ),
            LifestyleKind::Nutrition => template(
                "lifestyle_nutrition",
                instrument_id,
                level,
                RecommendationCategory::Lifestyle,
                Priority::Low,
                "Mediterranean-style diet",
                "A Mediterranean-style diet is associated with slower cognitive \
                 decline.",
                &["Emphasize vegetables, fish, whole grains, and olive oil"],
                None,
                90,
            ),
            LifestyleKind::Sleep => template(
                "lifestyle_sleep",
                instrument_id,
                level,
                RecommendationCategory::Lifestyle,
                Priority::Low,
                "Sleep hygiene",
                "Consistent, sufficient sleep supports memory consolidation and \
                 mood stability.",
                &["Keep a regular sleep schedule of 7-9 hours"],
                None,
                90,
            ),
            LifestyleKind::CognitiveStimulation => template(
                "lifestyle_cognitive_stimulation",
                instrument_id,
                level,
                RecommendationCategory::Lifestyle,
                Priority::Medium,
                "Cognitive stimulation",
                "Regular cognitively demanding activity is associated with \
                 preserved function.",
                &["Engage in reading, puzzles, or learning activities most days"],
                None,
                90,
            ),
            LifestyleKind::SocialEngagement => template(
                "lifestyle_social_engagement",
                instrument_id,
                level,
                RecommendationCategory::Lifestyle,
                Priority::Medium,
                "Social engagement",
                "Social isolation worsens both cognitive and mood outcomes.",
                &["Schedule regular social activities each week"],
                None,
                60,
            ),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    instrument_id: &str,
    risk_level: RiskCategory,
    category: RecommendationCategory,
    priority: Priority,
    title: &str,
    description: &str,
    action_steps: &[&str],
    resources: Option<&[&str]>,
    follow_up_days: u32,
) -> Recommendation {
    Recommendation {
        id: id.to_string(),
        instrument_id: instrument_id.to_string(),
        risk_level,
        category,
        priority,
        title: title.to_string(),
        description: description.to_string(),
        action_steps: action_steps.iter().map(|s| (*s).to_string()).collect(),
        resources: resources.map(|r| r.iter().map(|s| (*s).to_string()).collect()),
        follow_up_days,
    }
}
