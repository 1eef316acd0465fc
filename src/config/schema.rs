use serde::{Deserialize, Serialize};

use crate::input::{
    clamp_to, InputRecord, AGE_RANGE, HEIGHT_RANGE, MARRIAGE_YEARS_RANGE, WEIGHT_RANGE,
};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Initial values for the form, overriding the built-in defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

/// Optional per-field overrides for the initial input record.
///
/// Categorical fields are given as their display labels (e.g.
/// `lifestyle: "Moderate"`, `diagnosis: "One factor"`). Unknown labels and
/// out-of-range numbers are rejected at startup by [`super::validation`].
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub marriage_years: Option<u32>,
    #[serde(default)]
    pub lifestyle: Option<String>,
    #[serde(default)]
    pub menstruation: Option<String>,
    #[serde(default)]
    pub sex_frequency: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub ovulation: Option<String>,
    #[serde(default)]
    pub stress: Option<String>,
    #[serde(default)]
    pub sleep: Option<String>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub substance: Option<String>,
    #[serde(default)]
    pub family_history: Option<String>,
}

impl Defaults {
    /// Build the initial input record: built-in defaults overlaid with any
    /// configured values. Expects a validated config; labels that still fail
    /// to parse keep the built-in default.
    pub fn apply(&self) -> InputRecord {
        let mut record = InputRecord::default();

        if let Some(age) = self.age {
            record.age = clamp_to(&AGE_RANGE, age);
        }
        if let Some(weight) = self.weight {
            record.weight = clamp_to(&WEIGHT_RANGE, weight);
        }
        if let Some(height) = self.height {
            record.height = clamp_to(&HEIGHT_RANGE, height);
        }
        if let Some(years) = self.marriage_years {
            record.marriage_years = clamp_to(&MARRIAGE_YEARS_RANGE, years);
        }

        if let Some(ref v) = self.lifestyle {
            if let Ok(parsed) = v.parse() {
                record.lifestyle = parsed;
            }
        }
        if let Some(ref v) = self.menstruation {
            if let Ok(parsed) = v.parse() {
                record.menstruation = parsed;
            }
        }
        if let Some(ref v) = self.sex_frequency {
            if let Ok(parsed) = v.parse() {
                record.sex_frequency = parsed;
            }
        }
        if let Some(ref v) = self.diagnosis {
            if let Ok(parsed) = v.parse() {
                record.diagnosis = parsed;
            }
        }
        if let Some(ref v) = self.ovulation {
            if let Ok(parsed) = v.parse() {
                record.ovulation = parsed;
            }
        }
        if let Some(ref v) = self.stress {
            if let Ok(parsed) = v.parse() {
                record.stress = parsed;
            }
        }
        if let Some(ref v) = self.sleep {
            if let Ok(parsed) = v.parse() {
                record.sleep = parsed;
            }
        }
        if let Some(ref v) = self.diet {
            if let Ok(parsed) = v.parse() {
                record.diet = parsed;
            }
        }
        if let Some(ref v) = self.substance {
            if let Ok(parsed) = v.parse() {
                record.substance = parsed;
            }
        }
        if let Some(ref v) = self.family_history {
            if let Ok(parsed) = v.parse() {
                record.family_history = parsed;
            }
        }

        record
    }
}
