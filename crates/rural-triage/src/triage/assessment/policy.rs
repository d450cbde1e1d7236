use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lowest score classified as [`RiskLevel::High`].
pub const HIGH_RISK_THRESHOLD: u8 = 60;
/// Lowest score classified as [`RiskLevel::Medium`].
pub const MEDIUM_RISK_THRESHOLD: u8 = 30;

pub const URGENT_REFERRAL: &str = "URGENT REFERRAL TO PHC/HOSPITAL";
pub const FOLLOW_UP_WITHIN_48_HOURS: &str = "Schedule Follow-up within 48 hours";
pub const HOME_CARE: &str = "Home Care with monitoring";

/// Coarse triage tier derived from a risk score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown risk level '{0}' (expected LOW, MEDIUM or HIGH)")]
pub struct UnknownRiskLevel(pub String);

impl FromStr for RiskLevel {
    type Err = UnknownRiskLevel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(RiskLevel::Low),
            "MEDIUM" => Ok(RiskLevel::Medium),
            "HIGH" => Ok(RiskLevel::High),
            _ => Err(UnknownRiskLevel(value.to_string())),
        }
    }
}

/// Classify a score. Each tier's lower bound is inclusive.
pub fn level_of(score: u8) -> RiskLevel {
    if score >= HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Advisory action for a tier.
pub fn recommendation_of(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => URGENT_REFERRAL,
        RiskLevel::Medium => FOLLOW_UP_WITHIN_48_HOURS,
        RiskLevel::Low => HOME_CARE,
    }
}
