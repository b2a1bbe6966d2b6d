use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Comparison constants for the three rules.
///
/// `Default` yields the standard screening cut-offs. Deserializing a
/// partial document fills the remaining fields from those same defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    /// Rule A: sleep strictly below this many hours.
    pub insomnia_sleep_below: f64,
    /// Rule A: stress strictly above this score.
    pub insomnia_stress_above: f64,
    /// Rule B: bmi code at or above this.
    pub apnea_bmi_min: f64,
    /// Rule B: snoring code at or above this.
    pub apnea_snoring_min: f64,
    /// Rule C: sleep strictly below this many hours, checked first.
    pub deprivation_sleep_below: f64,
    /// Rule C: exact bmi code.
    pub severe_bmi: f64,
    /// Rule C: exact snoring code.
    pub severe_snoring: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            insomnia_sleep_below: 6.0,
            insomnia_stress_above: 7.0,
            apnea_bmi_min: 1.0,
            apnea_snoring_min: 1.0,
            deprivation_sleep_below: 5.0,
            severe_bmi: 2.0,
            severe_snoring: 2.0,
        }
    }
}

impl Thresholds {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("insomnia_sleep_below", self.insomnia_sleep_below),
            ("insomnia_stress_above", self.insomnia_stress_above),
            ("apnea_bmi_min", self.apnea_bmi_min),
            ("apnea_snoring_min", self.apnea_snoring_min),
            ("deprivation_sleep_below", self.deprivation_sleep_below),
            ("severe_bmi", self.severe_bmi),
            ("severe_snoring", self.severe_snoring),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        Ok(())
    }
}
