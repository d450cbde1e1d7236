use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::assessment::{
    AssessmentResult, Condition, PatientInput, RiskLevel, Symptom, VitalSigns, VitalsReading,
};

/// Sequential, 1-based identifier assigned when a visit is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VisitId(pub u64);

impl fmt::Display for VisitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown gender '{0}' (expected Male, Female or Other)")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(UnknownGender(value.to_string())),
        }
    }
}

/// Raw visit details as entered by a health worker, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitSubmission {
    pub patient_name: String,
    pub age: u8,
    pub gender: Gender,
    pub village: String,
    #[serde(default)]
    pub health_worker: Option<String>,
    #[serde(default)]
    pub visit_date: Option<NaiveDate>,
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub other_symptoms: Option<String>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub vitals: VitalsReading,
}

/// A scored visit that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVisit {
    pub patient_name: String,
    pub age: u8,
    pub gender: Gender,
    pub village: String,
    pub health_worker: String,
    pub visit_date: NaiveDate,
    pub symptoms: Vec<Symptom>,
    pub conditions: Vec<Condition>,
    pub vitals: VitalSigns,
    pub assessment: AssessmentResult,
    pub timestamp: DateTime<Utc>,
}

/// One persisted triage event. Field names and order are the on-disk
/// document layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub id: VisitId,
    pub patient_name: String,
    pub age: u8,
    pub gender: Gender,
    pub village: String,
    #[serde(default)]
    pub health_worker: String,
    pub visit_date: NaiveDate,
    pub symptoms: Vec<Symptom>,
    pub conditions: Vec<Condition>,
    pub vitals: VitalSigns,
    #[serde(flatten)]
    pub assessment: AssessmentResult,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl VisitRecord {
    pub fn from_new(id: VisitId, visit: NewVisit) -> Self {
        Self {
            id,
            patient_name: visit.patient_name,
            age: visit.age,
            gender: visit.gender,
            village: visit.village,
            health_worker: visit.health_worker,
            visit_date: visit.visit_date,
            symptoms: visit.symptoms,
            conditions: visit.conditions,
            vitals: visit.vitals,
            assessment: visit.assessment,
            timestamp: visit.timestamp,
        }
    }

    pub fn score(&self) -> u8 {
        self.assessment.score
    }

    pub fn level(&self) -> RiskLevel {
        self.assessment.level
    }

    /// Rebuild the clinical input this visit was scored from.
    pub fn patient_input(&self) -> PatientInput {
        PatientInput::new(self.age)
            .with_symptoms(self.symptoms.iter().cloned())
            .with_conditions(self.conditions.iter().cloned())
            .with_vitals(VitalsReading::from(self.vitals))
    }
}

/// Accepts RFC 3339 instants as well as offset-less ISO timestamps, which are
/// read as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|err| format!("failed to parse '{raw}' as an ISO-8601 timestamp ({err})"))
}
