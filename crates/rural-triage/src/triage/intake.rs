use std::ops::RangeInclusive;

use chrono::NaiveDate;

use super::assessment::{Condition, PatientInput, Symptom, VitalsReading};
use super::domain::{Gender, VisitSubmission};

/// Validation errors raised before a visit reaches the scoring engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("required field '{field}' is missing")]
    MissingField { field: &'static str },
    #[error("age {found} is outside the accepted range {min}-{max}")]
    AgeOutOfRange { found: u8, min: u8, max: u8 },
    #[error("{vital} reading {found} is outside the accepted range {min}-{max}")]
    VitalOutOfRange {
        vital: &'static str,
        found: f64,
        min: f64,
        max: f64,
    },
}

/// Accepted input ranges, matching what the intake form allows to be entered.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakePolicy {
    pub age: RangeInclusive<u8>,
    pub bp_systolic: RangeInclusive<u16>,
    pub bp_diastolic: RangeInclusive<u16>,
    pub heart_rate: RangeInclusive<u16>,
    pub temperature: RangeInclusive<f64>,
    pub spo2: RangeInclusive<u8>,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            age: 0..=120,
            bp_systolic: 60..=220,
            bp_diastolic: 40..=140,
            heart_rate: 30..=200,
            temperature: 95.0..=106.0,
            spo2: 70..=100,
        }
    }
}

/// Identity and context fields of a validated visit.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitContext {
    pub patient_name: String,
    pub gender: Gender,
    pub village: String,
    pub health_worker: String,
    pub visit_date: Option<NaiveDate>,
}

/// A submission that passed intake, split into what the engine scores and
/// what is only recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedVisit {
    pub context: VisitContext,
    pub input: PatientInput,
    /// Symptoms in submission order, free text last.
    pub symptoms: Vec<Symptom>,
    pub conditions: Vec<Condition>,
}

/// Guard responsible for producing [`ValidatedVisit`] instances.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    pub fn validate(&self, submission: VisitSubmission) -> Result<ValidatedVisit, IntakeError> {
        let patient_name = required("patient_name", &submission.patient_name)?;
        let village = required("village", &submission.village)?;

        if !self.policy.age.contains(&submission.age) {
            return Err(IntakeError::AgeOutOfRange {
                found: submission.age,
                min: *self.policy.age.start(),
                max: *self.policy.age.end(),
            });
        }

        self.check_vitals(&submission.vitals)?;

        let mut symptoms: Vec<Symptom> = submission
            .symptoms
            .into_iter()
            .map(Symptom::canonical)
            .collect();
        if let Some(text) = submission.other_symptoms.as_deref().map(str::trim) {
            if !text.is_empty() {
                symptoms.push(Symptom::from(text));
            }
        }
        let conditions: Vec<Condition> = submission
            .conditions
            .into_iter()
            .map(Condition::canonical)
            .collect();

        let input = PatientInput::new(submission.age)
            .with_symptoms(symptoms.iter().cloned())
            .with_conditions(conditions.iter().cloned())
            .with_vitals(submission.vitals);

        Ok(ValidatedVisit {
            context: VisitContext {
                patient_name,
                gender: submission.gender,
                village,
                health_worker: submission
                    .health_worker
                    .map(|worker| worker.trim().to_string())
                    .unwrap_or_default(),
                visit_date: submission.visit_date,
            },
            input,
            symptoms,
            conditions,
        })
    }

    fn check_vitals(&self, vitals: &VitalsReading) -> Result<(), IntakeError> {
        let policy = &self.policy;
        check_range("bp_systolic", vitals.bp_systolic, &policy.bp_systolic)?;
        check_range("bp_diastolic", vitals.bp_diastolic, &policy.bp_diastolic)?;
        check_range("heart_rate", vitals.heart_rate, &policy.heart_rate)?;
        check_range("spo2", vitals.spo2, &policy.spo2)?;

        if let Some(temperature) = vitals.temperature {
            if !temperature.is_finite() || !policy.temperature.contains(&temperature) {
                return Err(IntakeError::VitalOutOfRange {
                    vital: "temperature",
                    found: temperature,
                    min: *policy.temperature.start(),
                    max: *policy.temperature.end(),
                });
            }
        }

        Ok(())
    }
}

fn required(field: &'static str, value: &str) -> Result<String, IntakeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IntakeError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

fn check_range<T>(
    vital: &'static str,
    reading: Option<T>,
    range: &RangeInclusive<T>,
) -> Result<(), IntakeError>
where
    T: Copy + PartialOrd + Into<f64>,
{
    match reading {
        Some(value) if !range.contains(&value) => Err(IntakeError::VitalOutOfRange {
            vital,
            found: value.into(),
            min: (*range.start()).into(),
            max: (*range.end()).into(),
        }),
        _ => Ok(()),
    }
}
