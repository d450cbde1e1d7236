use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Symptom tags offered on the intake form.
///
/// Anything outside the fixed vocabulary, such as the free-text "other
/// symptoms" field, is carried verbatim in [`Symptom::Other`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Symptom {
    Fever,
    Cough,
    Cold,
    ChestPain,
    Breathlessness,
    Headache,
    BodyAche,
    Vomiting,
    Diarrhea,
    Confusion,
    SevereBleeding,
    HighFever,
    PersistentCough,
    SeverePain,
    Dizziness,
    Other(String),
}

/// Severity band a symptom contributes to the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymptomSeverity {
    Critical,
    Moderate,
    Minor,
}

impl Symptom {
    pub const VOCABULARY: [Symptom; 15] = [
        Symptom::Fever,
        Symptom::Cough,
        Symptom::Cold,
        Symptom::ChestPain,
        Symptom::Breathlessness,
        Symptom::Headache,
        Symptom::BodyAche,
        Symptom::Vomiting,
        Symptom::Diarrhea,
        Symptom::Confusion,
        Symptom::SevereBleeding,
        Symptom::HighFever,
        Symptom::PersistentCough,
        Symptom::SeverePain,
        Symptom::Dizziness,
    ];

    pub fn parse(tag: &str) -> Self {
        match tag {
            "fever" => Symptom::Fever,
            "cough" => Symptom::Cough,
            "cold" => Symptom::Cold,
            "chest_pain" => Symptom::ChestPain,
            "breathlessness" => Symptom::Breathlessness,
            "headache" => Symptom::Headache,
            "body_ache" => Symptom::BodyAche,
            "vomiting" => Symptom::Vomiting,
            "diarrhea" => Symptom::Diarrhea,
            "confusion" => Symptom::Confusion,
            "severe_bleeding" => Symptom::SevereBleeding,
            "high_fever" => Symptom::HighFever,
            "persistent_cough" => Symptom::PersistentCough,
            "severe_pain" => Symptom::SeverePain,
            "dizziness" => Symptom::Dizziness,
            other => Symptom::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Symptom::Fever => "fever",
            Symptom::Cough => "cough",
            Symptom::Cold => "cold",
            Symptom::ChestPain => "chest_pain",
            Symptom::Breathlessness => "breathlessness",
            Symptom::Headache => "headache",
            Symptom::BodyAche => "body_ache",
            Symptom::Vomiting => "vomiting",
            Symptom::Diarrhea => "diarrhea",
            Symptom::Confusion => "confusion",
            Symptom::SevereBleeding => "severe_bleeding",
            Symptom::HighFever => "high_fever",
            Symptom::PersistentCough => "persistent_cough",
            Symptom::SeverePain => "severe_pain",
            Symptom::Dizziness => "dizziness",
            Symptom::Other(text) => text,
        }
    }

    /// Replace `Other` text that names a known tag with that tag, so the value
    /// reads back identically from its string form.
    pub fn canonical(self) -> Self {
        match self {
            Symptom::Other(text) => Symptom::from(text),
            known => known,
        }
    }

    pub fn severity(&self) -> SymptomSeverity {
        match self {
            Symptom::ChestPain
            | Symptom::Breathlessness
            | Symptom::Confusion
            | Symptom::SevereBleeding => SymptomSeverity::Critical,
            Symptom::HighFever | Symptom::PersistentCough | Symptom::SeverePain => {
                SymptomSeverity::Moderate
            }
            _ => SymptomSeverity::Minor,
        }
    }
}

impl From<String> for Symptom {
    fn from(value: String) -> Self {
        match Symptom::parse(&value) {
            Symptom::Other(_) => Symptom::Other(value),
            known => known,
        }
    }
}

impl From<&str> for Symptom {
    fn from(value: &str) -> Self {
        Symptom::parse(value)
    }
}

impl FromStr for Symptom {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Symptom::parse(value.trim()))
    }
}

impl From<Symptom> for String {
    fn from(value: Symptom) -> Self {
        match value {
            Symptom::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-existing condition tags offered on the intake form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Diabetes,
    Hypertension,
    HeartDisease,
    Asthma,
    Copd,
    Pregnancy,
    Tb,
    KidneyDisease,
    None,
    Other(String),
}

/// Risk band a pre-existing condition contributes to the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionRisk {
    High,
    Moderate,
    Negligible,
}

impl Condition {
    pub const VOCABULARY: [Condition; 9] = [
        Condition::Diabetes,
        Condition::Hypertension,
        Condition::HeartDisease,
        Condition::Asthma,
        Condition::Copd,
        Condition::Pregnancy,
        Condition::Tb,
        Condition::KidneyDisease,
        Condition::None,
    ];

    pub fn parse(tag: &str) -> Self {
        match tag {
            "diabetes" => Condition::Diabetes,
            "hypertension" => Condition::Hypertension,
            "heart_disease" => Condition::HeartDisease,
            "asthma" => Condition::Asthma,
            "copd" => Condition::Copd,
            "pregnancy" => Condition::Pregnancy,
            "tb" => Condition::Tb,
            "kidney_disease" => Condition::KidneyDisease,
            "none" => Condition::None,
            other => Condition::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Condition::Diabetes => "diabetes",
            Condition::Hypertension => "hypertension",
            Condition::HeartDisease => "heart_disease",
            Condition::Asthma => "asthma",
            Condition::Copd => "copd",
            Condition::Pregnancy => "pregnancy",
            Condition::Tb => "tb",
            Condition::KidneyDisease => "kidney_disease",
            Condition::None => "none",
            Condition::Other(text) => text,
        }
    }

    /// Replace `Other` text that names a known tag with that tag, so the value
    /// reads back identically from its string form.
    pub fn canonical(self) -> Self {
        match self {
            Condition::Other(text) => Condition::from(text),
            known => known,
        }
    }

    pub fn risk(&self) -> ConditionRisk {
        match self {
            Condition::HeartDisease | Condition::Copd => ConditionRisk::High,
            Condition::Diabetes | Condition::Hypertension | Condition::Pregnancy => {
                ConditionRisk::Moderate
            }
            _ => ConditionRisk::Negligible,
        }
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        match Condition::parse(&value) {
            Condition::Other(_) => Condition::Other(value),
            known => known,
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Condition::parse(value)
    }
}

impl FromStr for Condition {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Condition::parse(value.trim()))
    }
}

impl From<Condition> for String {
    fn from(value: Condition) -> Self {
        match value {
            Condition::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
