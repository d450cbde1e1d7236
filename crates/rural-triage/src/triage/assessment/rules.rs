use super::vitals::VitalSigns;
use super::vocabulary::{ConditionRisk, SymptomSeverity};
use super::{PatientInput, ScoreComponent, ScoreFactor};

const INFANT_AGE_LIMIT: u8 = 5;
const ELDERLY_AGE_LIMIT: u8 = 60;
const INFANT_POINTS: u8 = 15;
const ELDERLY_POINTS: u8 = 20;

const CRITICAL_SYMPTOM_POINTS: u8 = 25;
const MODERATE_SYMPTOM_POINTS: u8 = 10;
const MINOR_SYMPTOM_POINTS: u8 = 5;

const HIGH_RISK_CONDITION_POINTS: u8 = 15;
const MODERATE_RISK_CONDITION_POINTS: u8 = 10;

const SYSTOLIC_HIGH: u16 = 140;
const SYSTOLIC_LOW: u16 = 90;
const DIASTOLIC_HIGH: u16 = 90;
const DIASTOLIC_LOW: u16 = 60;
const HEART_RATE_HIGH: u16 = 100;
const HEART_RATE_LOW: u16 = 50;
const FEVER_THRESHOLD_F: f64 = 101.0;
const SPO2_LOW: u8 = 94;

pub(crate) fn score_components(input: &PatientInput) -> Vec<ScoreComponent> {
    let mut components = Vec::new();

    if input.age < INFANT_AGE_LIMIT {
        components.push(ScoreComponent {
            factor: ScoreFactor::Age,
            points: INFANT_POINTS,
            notes: format!("age {} is under {}", input.age, INFANT_AGE_LIMIT),
        });
    } else if input.age > ELDERLY_AGE_LIMIT {
        components.push(ScoreComponent {
            factor: ScoreFactor::Age,
            points: ELDERLY_POINTS,
            notes: format!("age {} is over {}", input.age, ELDERLY_AGE_LIMIT),
        });
    }

    for symptom in &input.symptoms {
        let (points, band) = match symptom.severity() {
            SymptomSeverity::Critical => (CRITICAL_SYMPTOM_POINTS, "critical"),
            SymptomSeverity::Moderate => (MODERATE_SYMPTOM_POINTS, "moderate"),
            SymptomSeverity::Minor => (MINOR_SYMPTOM_POINTS, "minor"),
        };
        components.push(ScoreComponent {
            factor: ScoreFactor::Symptom,
            points,
            notes: format!("{band} symptom '{symptom}'"),
        });
    }

    components.extend(vital_components(&input.vitals.resolve()));

    for condition in &input.conditions {
        let points = match condition.risk() {
            ConditionRisk::High => HIGH_RISK_CONDITION_POINTS,
            ConditionRisk::Moderate => MODERATE_RISK_CONDITION_POINTS,
            ConditionRisk::Negligible => continue,
        };
        components.push(ScoreComponent {
            factor: ScoreFactor::Condition,
            points,
            notes: format!("pre-existing condition '{condition}'"),
        });
    }

    components
}

fn vital_components(vitals: &VitalSigns) -> Vec<ScoreComponent> {
    let mut components = Vec::new();

    if vitals.bp_systolic > SYSTOLIC_HIGH || vitals.bp_systolic < SYSTOLIC_LOW {
        components.push(ScoreComponent {
            factor: ScoreFactor::SystolicPressure,
            points: 15,
            notes: format!(
                "systolic {} mmHg outside {}-{}",
                vitals.bp_systolic, SYSTOLIC_LOW, SYSTOLIC_HIGH
            ),
        });
    }

    if vitals.bp_diastolic > DIASTOLIC_HIGH || vitals.bp_diastolic < DIASTOLIC_LOW {
        components.push(ScoreComponent {
            factor: ScoreFactor::DiastolicPressure,
            points: 10,
            notes: format!(
                "diastolic {} mmHg outside {}-{}",
                vitals.bp_diastolic, DIASTOLIC_LOW, DIASTOLIC_HIGH
            ),
        });
    }

    if vitals.heart_rate > HEART_RATE_HIGH || vitals.heart_rate < HEART_RATE_LOW {
        components.push(ScoreComponent {
            factor: ScoreFactor::HeartRate,
            points: 15,
            notes: format!(
                "heart rate {} bpm outside {}-{}",
                vitals.heart_rate, HEART_RATE_LOW, HEART_RATE_HIGH
            ),
        });
    }

    if vitals.temperature > FEVER_THRESHOLD_F {
        components.push(ScoreComponent {
            factor: ScoreFactor::Temperature,
            points: 10,
            notes: format!(
                "temperature {:.1}°F above {:.1}°F",
                vitals.temperature, FEVER_THRESHOLD_F
            ),
        });
    }

    if vitals.spo2 < SPO2_LOW {
        components.push(ScoreComponent {
            factor: ScoreFactor::OxygenSaturation,
            points: 20,
            notes: format!("SpO2 {}% below {}%", vitals.spo2, SPO2_LOW),
        });
    }

    components
}
