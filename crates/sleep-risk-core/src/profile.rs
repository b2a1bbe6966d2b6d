use crate::error::InputConversionError;
use serde::{Deserialize, Serialize};

/// Positional argument order.
pub const FIELDS: [&str; 6] = ["age", "gender", "sleep", "stress", "bmi", "snoring"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepProfile {
    pub age: Option<i64>,
    pub gender: String,
    pub sleep: f64,
    pub stress: f64,
    pub bmi: f64,
    pub snoring: f64,
}

impl SleepProfile {
    /// Builds a profile from positional fields in `FIELDS` order.
    ///
    /// Fields past the sixth are ignored. Age and gender are carried along
    /// without being checked, since no rule reads them.
    pub fn parse<S: AsRef<str>>(fields: &[S]) -> Result<Self, InputConversionError> {
        let age = field(fields, 0)?.trim().parse::<i64>().ok();
        let gender = field(fields, 1)?.to_string();
        let sleep = number(fields, 2)?;
        let stress = number(fields, 3)?;
        let bmi = number(fields, 4)?;
        let snoring = number(fields, 5)?;

        Ok(Self {
            age,
            gender,
            sleep,
            stress,
            bmi,
            snoring,
        })
    }
}

fn field<S: AsRef<str>>(fields: &[S], idx: usize) -> Result<&str, InputConversionError> {
    fields
        .get(idx)
        .map(|f| f.as_ref())
        .ok_or(InputConversionError::Missing { field: FIELDS[idx] })
}

fn number<S: AsRef<str>>(fields: &[S], idx: usize) -> Result<f64, InputConversionError> {
    let raw = field(fields, idx)?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputConversionError::Malformed {
            field: FIELDS[idx],
            value: raw.to_string(),
        }),
    }
}
