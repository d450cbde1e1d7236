use serde::{Deserialize, Serialize};

/// Fully resolved vital signs, as scored and persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Systolic blood pressure in mmHg.
    pub bp_systolic: u16,
    /// Diastolic blood pressure in mmHg.
    pub bp_diastolic: u16,
    /// Beats per minute.
    pub heart_rate: u16,
    /// Body temperature in °F.
    pub temperature: f64,
    /// Oxygen saturation in percent.
    pub spo2: u8,
}

impl VitalSigns {
    /// Clinically normal baseline used for every vital that was not measured.
    /// None of these values trips a scoring threshold.
    pub const BASELINE: VitalSigns = VitalSigns {
        bp_systolic: 120,
        bp_diastolic: 80,
        heart_rate: 75,
        temperature: 98.6,
        spo2: 98,
    };
}

impl Default for VitalSigns {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Vitals as captured at the bedside, where any reading may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalsReading {
    #[serde(default)]
    pub bp_systolic: Option<u16>,
    #[serde(default)]
    pub bp_diastolic: Option<u16>,
    #[serde(default)]
    pub heart_rate: Option<u16>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub spo2: Option<u8>,
}

impl VitalsReading {
    /// Fill every missing reading from [`VitalSigns::BASELINE`].
    pub fn resolve(&self) -> VitalSigns {
        let baseline = VitalSigns::BASELINE;
        VitalSigns {
            bp_systolic: self.bp_systolic.unwrap_or(baseline.bp_systolic),
            bp_diastolic: self.bp_diastolic.unwrap_or(baseline.bp_diastolic),
            heart_rate: self.heart_rate.unwrap_or(baseline.heart_rate),
            temperature: self.temperature.unwrap_or(baseline.temperature),
            spo2: self.spo2.unwrap_or(baseline.spo2),
        }
    }
}

impl From<VitalSigns> for VitalsReading {
    fn from(value: VitalSigns) -> Self {
        Self {
            bp_systolic: Some(value.bp_systolic),
            bp_diastolic: Some(value.bp_diastolic),
            heart_rate: Some(value.heart_rate),
            temperature: Some(value.temperature),
            spo2: Some(value.spo2),
        }
    }
}
