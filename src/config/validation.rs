use crate::input::{
    Diagnosis, Diet, FamilyHistory, Lifestyle, Menstruation, Ovulation, SexFrequency, Sleep,
    Stress, Substance, AGE_RANGE, HEIGHT_RANGE, MARRIAGE_YEARS_RANGE, WEIGHT_RANGE,
};

use super::schema::Defaults;

/// Validate configured defaults at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_defaults(defaults: &Defaults) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_range("defaults.age", defaults.age, &AGE_RANGE, &mut errors);
    check_range("defaults.weight", defaults.weight, &WEIGHT_RANGE, &mut errors);
    check_range("defaults.height", defaults.height, &HEIGHT_RANGE, &mut errors);
    check_range(
        "defaults.marriage_years",
        defaults.marriage_years,
        &MARRIAGE_YEARS_RANGE,
        &mut errors,
    );

    check_label::<Lifestyle>("defaults.lifestyle", &defaults.lifestyle, &mut errors);
    check_label::<Menstruation>("defaults.menstruation", &defaults.menstruation, &mut errors);
    check_label::<SexFrequency>("defaults.sex_frequency", &defaults.sex_frequency, &mut errors);
    check_label::<Diagnosis>("defaults.diagnosis", &defaults.diagnosis, &mut errors);
    check_label::<Ovulation>("defaults.ovulation", &defaults.ovulation, &mut errors);
    check_label::<Stress>("defaults.stress", &defaults.stress, &mut errors);
    check_label::<Sleep>("defaults.sleep", &defaults.sleep, &mut errors);
    check_label::<Diet>("defaults.diet", &defaults.diet, &mut errors);
    check_label::<Substance>("defaults.substance", &defaults.substance, &mut errors);
    check_label::<FamilyHistory>("defaults.family_history", &defaults.family_history, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_range(
    key: &str,
    value: Option<u32>,
    range: &std::ops::RangeInclusive<u32>,
    errors: &mut Vec<String>,
) {
    if let Some(v) = value {
        if !range.contains(&v) {
            errors.push(format!(
                "{}: {} is outside {}..={}",
                key,
                v,
                range.start(),
                range.end()
            ));
        }
    }
}

fn check_label<T: std::str::FromStr<Err = String>>(
    key: &str,
    value: &Option<String>,
    errors: &mut Vec<String>,
) {
    if let Some(v) = value {
        if let Err(e) = v.parse::<T>() {
            errors.push(format!("{}: {}", key, e));
        }
    }
}
