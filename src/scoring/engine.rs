use serde::Serialize;

use super::bmi::compute_bmi;
use super::factors;
use crate::input::InputRecord;

/// Maximum total: 13 factors at 3 points each.
pub const MAX_TOTAL: u8 = 39;

/// The 13 scored factors, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    Age,
    Bmi,
    Marriage,
    Lifestyle,
    Menstruation,
    Sex,
    Diagnosis,
    Ovulation,
    Stress,
    Sleep,
    Diet,
    Substance,
    FamilyHistory,
}

impl Factor {
    pub const ALL: &'static [Factor] = &[
        Factor::Age,
        Factor::Bmi,
        Factor::Marriage,
        Factor::Lifestyle,
        Factor::Menstruation,
        Factor::Sex,
        Factor::Diagnosis,
        Factor::Ovulation,
        Factor::Stress,
        Factor::Sleep,
        Factor::Diet,
        Factor::Substance,
        Factor::FamilyHistory,
    ];

    /// Stable key, used in JSON output and breakdown rows.
    pub fn name(&self) -> &'static str {
        match self {
            Factor::Age => "age",
            Factor::Bmi => "bmi",
            Factor::Marriage => "marriage",
            Factor::Lifestyle => "lifestyle",
            Factor::Menstruation => "menstruation",
            Factor::Sex => "sex",
            Factor::Diagnosis => "diagnosis",
            Factor::Ovulation => "ovulation",
            Factor::Stress => "stress",
            Factor::Sleep => "sleep",
            Factor::Diet => "diet",
            Factor::Substance => "substance",
            Factor::FamilyHistory => "familyHistory",
        }
    }
}

impl Serialize for Factor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Coarse classification of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Band {
    Green,
    Blue,
    Orange,
    Red,
    Black,
}

impl Band {
    /// Band for a total. Inclusive lower bounds, highest first.
    pub fn for_total(total: u8) -> Band {
        if total >= 30 {
            Band::Green
        } else if total >= 20 {
            Band::Blue
        } else if total >= 10 {
            Band::Orange
        } else if total >= 5 {
            Band::Red
        } else {
            Band::Black
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Green => "Green",
            Band::Blue => "Blue",
            Band::Orange => "Orange",
            Band::Red => "Red",
            Band::Black => "Black",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One factor's contribution to the total.
#[derive(Debug, Clone, Serialize)]
pub struct FactorScore {
    pub factor: Factor,
    /// The input value the points were derived from, as shown to the user
    /// (e.g. "30", "24.2", "Active").
    pub value: String,
    /// 0..=3
    pub points: u8,
}

/// Immutable scoring result: 13 sub-scores, their sum, and its band.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub parts: Vec<FactorScore>,
    pub bmi: f64,
    pub total: u8,
    pub band: Band,
}

impl ScoreResult {
    /// Points for a single factor.
    pub fn points(&self, factor: Factor) -> u8 {
        self.parts
            .iter()
            .find(|p| p.factor == factor)
            .map(|p| p.points)
            .unwrap_or(0)
    }
}

/// Score an input record.
///
/// Pure and stateless: the record is only borrowed, and equal records always
/// produce equal results. The host recomputes on every field change.
pub fn compute_score(input: &InputRecord) -> ScoreResult {
    let bmi = compute_bmi(input.weight, input.height);

    let parts = vec![
        part(Factor::Age, input.age.to_string(), factors::score_age(input.age)),
        part(Factor::Bmi, format!("{:.1}", bmi), factors::score_bmi(bmi)),
        part(
            Factor::Marriage,
            input.marriage_years.to_string(),
            factors::score_marriage_years(input.marriage_years),
        ),
        part(
            Factor::Lifestyle,
            input.lifestyle.to_string(),
            factors::score_lifestyle(input.lifestyle.label()),
        ),
        part(
            Factor::Menstruation,
            input.menstruation.to_string(),
            factors::score_menstruation(input.menstruation.label()),
        ),
        part(
            Factor::Sex,
            input.sex_frequency.to_string(),
            factors::score_sex_frequency(input.sex_frequency.label()),
        ),
        part(
            Factor::Diagnosis,
            input.diagnosis.to_string(),
            factors::score_diagnosis(input.diagnosis.label()),
        ),
        part(
            Factor::Ovulation,
            input.ovulation.to_string(),
            factors::score_ovulation(input.ovulation.label()),
        ),
        part(
            Factor::Stress,
            input.stress.to_string(),
            factors::score_stress(input.stress.label()),
        ),
        part(
            Factor::Sleep,
            input.sleep.to_string(),
            factors::score_sleep(input.sleep.label()),
        ),
        part(
            Factor::Diet,
            input.diet.to_string(),
            factors::score_diet(input.diet.label()),
        ),
        part(
            Factor::Substance,
            input.substance.to_string(),
            factors::score_substance(input.substance.label()),
        ),
        part(
            Factor::FamilyHistory,
            input.family_history.to_string(),
            factors::score_family_history(input.family_history.label()),
        ),
    ];

    let total: u8 = parts.iter().map(|p| p.points).sum();

    ScoreResult {
        bmi,
        total,
        band: Band::for_total(total),
        parts,
    }
}

fn part(factor: Factor, value: String, points: u8) -> FactorScore {
    FactorScore {
        factor,
        value,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        Diet, FamilyHistory, Lifestyle, Menstruation, Ovulation, SexFrequency, Sleep, Stress,
        Substance,
    };

    #[test]
    fn test_default_record_scores_maximum() {
        let result = compute_score(&InputRecord::default());
        assert_eq!(result.bmi, 24.2);
        for p in &result.parts {
            assert_eq!(p.points, 3, "factor {} should score 3", p.factor.name());
        }
        assert_eq!(result.total, 39);
        assert_eq!(result.band, Band::Green);
    }

    #[test]
    fn test_total_equals_sum_of_parts() {
        let mut input = InputRecord::default();
        input.age = 44;
        input.lifestyle = Lifestyle::Sedentary;
        input.stress = Stress::Severe;
        input.sleep = Sleep::Poor;
        let result = compute_score(&input);
        let sum: u8 = result.parts.iter().map(|p| p.points).sum();
        assert_eq!(result.total, sum);
        assert!(result.total <= MAX_TOTAL);
    }

    #[test]
    fn test_every_factor_appears_exactly_once() {
        let result = compute_score(&InputRecord::default());
        assert_eq!(result.parts.len(), Factor::ALL.len());
        for factor in Factor::ALL {
            assert_eq!(
                result.parts.iter().filter(|p| p.factor == *factor).count(),
                1
            );
        }
    }

    #[test]
    fn test_worst_case_record_scores_low() {
        let input = InputRecord {
            age: 45,
            weight: 140,
            height: 170, // bmi 48.4 -> 0
            marriage_years: 12,
            lifestyle: Lifestyle::Sedentary,
            menstruation: Menstruation::IrregularlyIrregular,
            sex_frequency: SexFrequency::OnceAMonth,
            diagnosis: crate::input::Diagnosis::MultipleFactors,
            ovulation: Ovulation::None,
            stress: Stress::Severe,
            sleep: Sleep::Insomnia,
            diet: Diet::Poor,
            substance: Substance::Daily,
            family_history: FamilyHistory::Multiple,
        };
        let result = compute_score(&input);
        assert_eq!(result.total, 0);
        assert_eq!(result.band, Band::Black);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let input = InputRecord {
            age: 36,
            stress: Stress::High,
            ..InputRecord::default()
        };
        let a = compute_score(&input);
        let b = compute_score(&input);
        assert_eq!(a.total, b.total);
        assert_eq!(a.band, b.band);
        assert_eq!(a.bmi, b.bmi);
        for (x, y) in a.parts.iter().zip(b.parts.iter()) {
            assert_eq!(x.points, y.points);
            assert_eq!(x.value, y.value);
        }
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(Band::for_total(39), Band::Green);
        assert_eq!(Band::for_total(30), Band::Green);
        assert_eq!(Band::for_total(29), Band::Blue);
        assert_eq!(Band::for_total(20), Band::Blue);
        assert_eq!(Band::for_total(19), Band::Orange);
        assert_eq!(Band::for_total(10), Band::Orange);
        assert_eq!(Band::for_total(9), Band::Red);
        assert_eq!(Band::for_total(5), Band::Red);
        assert_eq!(Band::for_total(4), Band::Black);
        assert_eq!(Band::for_total(0), Band::Black);
    }

    #[test]
    fn test_band_depends_only_on_total() {
        // Two different records with the same total land in the same band.
        let a = InputRecord {
            lifestyle: Lifestyle::Sedentary, // -3
            ..InputRecord::default()
        };
        let b = InputRecord {
            stress: Stress::Severe, // -3
            ..InputRecord::default()
        };
        let ra = compute_score(&a);
        let rb = compute_score(&b);
        assert_eq!(ra.total, rb.total);
        assert_eq!(ra.band, rb.band);
    }

    #[test]
    fn test_zero_height_scores_via_bmi_guard() {
        // Not reachable through the clamped form, but the engine must not
        // divide by zero when called directly.
        let input = InputRecord {
            height: 0,
            ..InputRecord::default()
        };
        let result = compute_score(&input);
        assert_eq!(result.bmi, 0.0);
        // bmi 0 < 22 -> 1 point
        assert_eq!(result.points(Factor::Bmi), 1);
    }

    #[test]
    fn test_points_lookup() {
        let result = compute_score(&InputRecord::default());
        assert_eq!(result.points(Factor::Diet), 3);
        assert_eq!(result.points(Factor::Bmi), 3);
    }
}
