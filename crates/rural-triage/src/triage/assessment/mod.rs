mod policy;
mod rules;
mod vitals;
mod vocabulary;

pub use policy::{
    level_of, recommendation_of, RiskLevel, UnknownRiskLevel, FOLLOW_UP_WITHIN_48_HOURS,
    HIGH_RISK_THRESHOLD, HOME_CARE, MEDIUM_RISK_THRESHOLD, URGENT_REFERRAL,
};
pub use vitals::{VitalSigns, VitalsReading};
pub use vocabulary::{Condition, ConditionRisk, Symptom, SymptomSeverity};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Upper bound of the risk score.
pub const MAX_SCORE: u8 = 100;

/// Structured clinical input consumed once by [`assess`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientInput {
    pub age: u8,
    pub symptoms: BTreeSet<Symptom>,
    pub conditions: BTreeSet<Condition>,
    pub vitals: VitalsReading,
}

impl PatientInput {
    pub fn new(age: u8) -> Self {
        Self {
            age,
            ..Self::default()
        }
    }

    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symptom>,
    {
        self.symptoms.extend(symptoms.into_iter().map(Into::into));
        self
    }

    pub fn with_conditions<I, C>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Condition>,
    {
        self.conditions
            .extend(conditions.into_iter().map(Into::into));
        self
    }

    pub fn with_vitals(mut self, vitals: VitalsReading) -> Self {
        self.vitals = vitals;
        self
    }
}

/// What contributed a share of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Age,
    Symptom,
    SystolicPressure,
    DiastolicPressure,
    HeartRate,
    Temperature,
    OxygenSaturation,
    Condition,
}

/// Discrete contribution to a risk score, allowing a worker to see why a
/// patient was flagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u8,
    pub notes: String,
}

/// Score, tier and advice for one patient. Level and recommendation are
/// always derived from the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    #[serde(rename = "risk_score")]
    pub score: u8,
    #[serde(rename = "risk_level")]
    pub level: RiskLevel,
    pub recommendation: String,
}

impl AssessmentResult {
    pub fn from_score(score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        let level = level_of(score);
        Self {
            score,
            level,
            recommendation: recommendation_of(level).to_string(),
        }
    }
}

/// Every non-zero contribution to the unclamped score, in evaluation order
/// (age, symptoms, vitals, conditions).
pub fn score_breakdown(input: &PatientInput) -> Vec<ScoreComponent> {
    rules::score_components(input)
}

/// Score a patient. Never fails: unknown tags fall back to minimum weights
/// and missing vitals to the baseline.
pub fn assess(input: &PatientInput) -> AssessmentResult {
    let total: u32 = score_breakdown(input)
        .iter()
        .map(|component| u32::from(component.points))
        .sum();
    let score = total.min(u32::from(MAX_SCORE)) as u8;
    AssessmentResult::from_score(score)
}
