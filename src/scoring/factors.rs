//! Per-factor scorers. Every input maps independently to 0..=3 points.
//!
//! The range scorers are ordered if-chains with first-match-wins semantics.
//! Branch order is load-bearing: later arms overlap earlier ones, so do not
//! reorder or merge them.
//!
//! The categorical scorers key on display labels and fall back to a neutral
//! score for anything unrecognized, so a label coming from outside the closed
//! enums (config files, future fields) degrades instead of failing.

/// Score assigned to a label no table recognizes.
pub const UNRECOGNIZED_LABEL_SCORE: u8 = 1;

pub fn score_age(years: u32) -> u8 {
    if (21..=30).contains(&years) {
        3
    } else if (31..=35).contains(&years) {
        2
    } else if (36..=40).contains(&years) {
        1
    } else if years > 40 {
        0
    } else {
        0
    }
}

pub fn score_bmi(bmi: f64) -> u8 {
    if (24.0..=28.0).contains(&bmi) {
        3
    } else if (29.0..=35.0).contains(&bmi) {
        2
    } else if bmi < 22.0 {
        1
    } else if bmi > 35.0 {
        0
    } else if (22.0..24.0).contains(&bmi) {
        2
    } else if bmi > 28.0 && bmi < 29.0 {
        2
    } else {
        1
    }
}

pub fn score_marriage_years(years: u32) -> u8 {
    if years == 2 {
        3
    } else if (3..=5).contains(&years) {
        2
    } else if (6..=7).contains(&years) {
        1
    } else if years > 7 {
        0
    } else if years >= 1 && years < 2 {
        3
    } else {
        0
    }
}

pub fn score_lifestyle(label: &str) -> u8 {
    match label {
        "Active" => 3,
        "Good" => 2,
        "Moderate" => 1,
        "Sedentary" => 0,
        _ => UNRECOGNIZED_LABEL_SCORE,
    }
}

pub fn score_menstruation(label: &str) -> u8 {
    match label {
        "Regular" => 3,
        "Regularly/irregular" => 2,
        "Irregular" => 1,
        "Irregularly/irregular" => 0,
        _ => UNRECOGNIZED_LABEL_SCORE,
    }
}

pub fn score_sex_frequency(label: &str) -> u8 {
    match label {
        "Regular" => 3,
        "Irregular" => 2,
        "Once a week" => 1,
        "Once a month" => 0,
        _ => UNRECOGNIZED_LABEL_SCORE,
    }
}

pub fn score_diagnosis(label: &str) -> u8 {
    match label {
        "No factor" => 3,
        "One factor" => 2,
        "Two factors" => 1,
        "Multiple factors" => 0,
        _ => UNRECOGNIZED_LABEL_SCORE,
    }
}

pub fn score_ovulation(label: &str) -> u8 {
    match label {
        "Always" => 3,
        "Mostly" => 2,
        "Rare" => 1,
        "None" => 0,
        _ => UNRECOGNIZED_LABEL_SCORE,
    }
}

pub fn score_stress(label: &str) -> u8 {
    match label {
        "Low" => 3,
        "Moderate" => 2,
        "High" => 1,
        "Severe" => 0,
        _ => UNRECOGNIZED_LABEL_SCORE,
    }
}

pub fn score_sleep(label: &str) -> u8 {
    match label {
        "Good" => 3,
        "Fair" => 2,
        "Poor" => 1,
        "Insomnia" => 0,
        _ => UNRECOGNIZED_LABEL_SCORE,
    }
}

pub fn score_diet(label: &str) -> u8 {
    match label {
        "Balanced" => 3,
        "Mostly balanced" => 2,
        "Junk" => 1,
        "Poor" => 0,
        _ => UNRECOGNIZED_LABEL_SCORE,
    }
}

pub fn score_substance(label: &str) -> u8 {
    match label {
        "None" => 3,
        "Occasional" => 2,
        "Frequent" => 1,
        "Daily" => 0,
        _ => UNRECOGNIZED_LABEL_SCORE,
    }
}

pub fn score_family_history(label: &str) -> u8 {
    match label {
        "No history" => 3,
        "Remote" => 2,
        "Close" => 1,
        "Multiple" => 0,
        _ => UNRECOGNIZED_LABEL_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_band_edges() {
        assert_eq!(score_age(30), 3);
        assert_eq!(score_age(31), 2);
        assert_eq!(score_age(40), 1);
        assert_eq!(score_age(41), 0);
        assert_eq!(score_age(21), 3);
        // Below the first band falls through to the final arm
        assert_eq!(score_age(20), 0);
        assert_eq!(score_age(18), 0);
    }

    #[test]
    fn test_bmi_band_edges() {
        assert_eq!(score_bmi(24.0), 3);
        assert_eq!(score_bmi(24.2), 3);
        assert_eq!(score_bmi(28.0), 3);
        assert_eq!(score_bmi(29.0), 2);
        assert_eq!(score_bmi(35.0), 2);
        assert_eq!(score_bmi(35.1), 0);
        assert_eq!(score_bmi(21.9), 1);
    }

    #[test]
    fn test_bmi_late_overlapping_branches() {
        // These values fall past the first four arms and land in the late
        // 22..24 and 28..29 ranges.
        assert_eq!(score_bmi(23.0), 2);
        assert_eq!(score_bmi(22.0), 2);
        assert_eq!(score_bmi(23.9), 2);
        assert_eq!(score_bmi(28.5), 2);
    }

    #[test]
    fn test_marriage_years_edges() {
        assert_eq!(score_marriage_years(2), 3);
        assert_eq!(score_marriage_years(3), 2);
        assert_eq!(score_marriage_years(5), 2);
        assert_eq!(score_marriage_years(6), 1);
        assert_eq!(score_marriage_years(7), 1);
        assert_eq!(score_marriage_years(8), 0);
        // Late 1..2 branch, reachable only for exactly one year
        assert_eq!(score_marriage_years(1), 3);
        assert_eq!(score_marriage_years(0), 0);
    }

    #[test]
    fn test_categorical_tables() {
        assert_eq!(score_lifestyle("Active"), 3);
        assert_eq!(score_lifestyle("Sedentary"), 0);
        assert_eq!(score_menstruation("Regularly/irregular"), 2);
        assert_eq!(score_menstruation("Irregularly/irregular"), 0);
        assert_eq!(score_sex_frequency("Once a week"), 1);
        assert_eq!(score_diagnosis("Multiple factors"), 0);
        assert_eq!(score_ovulation("Mostly"), 2);
        assert_eq!(score_stress("High"), 1);
        assert_eq!(score_sleep("Insomnia"), 0);
        assert_eq!(score_diet("Mostly balanced"), 2);
        assert_eq!(score_substance("Daily"), 0);
        assert_eq!(score_family_history("Remote"), 2);
    }

    #[test]
    fn test_unrecognized_label_falls_back_to_one() {
        assert_eq!(score_lifestyle("Unknown"), 1);
        assert_eq!(score_menstruation(""), 1);
        assert_eq!(score_sex_frequency("Daily"), 1);
        assert_eq!(score_diagnosis("no factor"), 1); // tables are case-sensitive
        assert_eq!(score_ovulation("Sometimes"), 1);
        assert_eq!(score_stress("Extreme"), 1);
        assert_eq!(score_sleep("Great"), 1);
        assert_eq!(score_diet("Vegan"), 1);
        assert_eq!(score_substance("Never"), 1);
        assert_eq!(score_family_history("Unknown"), 1);
    }
}
