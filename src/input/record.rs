use serde::Serialize;
use std::ops::RangeInclusive;

use super::options::{
    Diagnosis, Diet, FamilyHistory, Lifestyle, Menstruation, Ovulation, SexFrequency, Sleep,
    Stress, Substance,
};

// Numeric field domains. The form clamps to these; config defaults are
// validated against them at startup.
pub const AGE_RANGE: RangeInclusive<u32> = 18..=60;
pub const WEIGHT_RANGE: RangeInclusive<u32> = 30..=200;
pub const HEIGHT_RANGE: RangeInclusive<u32> = 100..=220;
pub const MARRIAGE_YEARS_RANGE: RangeInclusive<u32> = 0..=40;

/// One snapshot of the 14 form fields.
///
/// The scoring engine only ever borrows a record; edits go through the form
/// (or CLI flags), which produces a fresh snapshot and recomputes the result
/// from scratch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputRecord {
    pub age: u32,
    /// Weight in kilograms.
    pub weight: u32,
    /// Height in centimeters.
    pub height: u32,
    pub marriage_years: u32,
    pub lifestyle: Lifestyle,
    pub menstruation: Menstruation,
    pub sex_frequency: SexFrequency,
    pub diagnosis: Diagnosis,
    pub ovulation: Ovulation,
    pub stress: Stress,
    pub sleep: Sleep,
    pub diet: Diet,
    pub substance: Substance,
    pub family_history: FamilyHistory,
}

impl Default for InputRecord {
    fn default() -> Self {
        Self {
            age: 30,
            weight: 70,
            height: 170,
            marriage_years: 2,
            lifestyle: Lifestyle::Active,
            menstruation: Menstruation::Regular,
            sex_frequency: SexFrequency::Regular,
            diagnosis: Diagnosis::NoFactor,
            ovulation: Ovulation::Always,
            stress: Stress::Low,
            sleep: Sleep::Good,
            diet: Diet::Balanced,
            substance: Substance::None,
            family_history: FamilyHistory::NoHistory,
        }
    }
}

/// Clamp a numeric field value into its domain.
pub fn clamp_to(range: &RangeInclusive<u32>, value: u32) -> u32 {
    value.clamp(*range.start(), *range.end())
}
