use std::time::Instant;

use crate::input::{
    clamp_to, InputRecord, AGE_RANGE, HEIGHT_RANGE, MARRIAGE_YEARS_RANGE, WEIGHT_RANGE,
};
use crate::scoring::{compute_score, Factor, ScoreResult};

/// The 14 editable form fields, in display order. Weight and height feed the
/// derived BMI factor instead of scoring directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Age,
    Weight,
    Height,
    MarriageYears,
    Lifestyle,
    Menstruation,
    SexFrequency,
    Diagnosis,
    Ovulation,
    Stress,
    Sleep,
    Diet,
    Substance,
    FamilyHistory,
}

impl FormField {
    pub const ALL: &'static [FormField] = &[
        FormField::Age,
        FormField::Weight,
        FormField::Height,
        FormField::MarriageYears,
        FormField::Lifestyle,
        FormField::Menstruation,
        FormField::SexFrequency,
        FormField::Diagnosis,
        FormField::Ovulation,
        FormField::Stress,
        FormField::Sleep,
        FormField::Diet,
        FormField::Substance,
        FormField::FamilyHistory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Age => "Age (years)",
            FormField::Weight => "Weight (kg)",
            FormField::Height => "Height (cm)",
            FormField::MarriageYears => "Marriage duration (years)",
            FormField::Lifestyle => "Lifestyle",
            FormField::Menstruation => "Menstruation pattern",
            FormField::SexFrequency => "Sexual intercourse",
            FormField::Diagnosis => "Diagnosis",
            FormField::Ovulation => "Ovulation pattern",
            FormField::Stress => "Stress level",
            FormField::Sleep => "Sleep quality",
            FormField::Diet => "Diet quality",
            FormField::Substance => "Substance use",
            FormField::FamilyHistory => "Family history",
        }
    }

    /// The factor this field scores under, if it scores directly.
    pub fn factor(&self) -> Option<Factor> {
        match self {
            FormField::Age => Some(Factor::Age),
            FormField::Weight | FormField::Height => None,
            FormField::MarriageYears => Some(Factor::Marriage),
            FormField::Lifestyle => Some(Factor::Lifestyle),
            FormField::Menstruation => Some(Factor::Menstruation),
            FormField::SexFrequency => Some(Factor::Sex),
            FormField::Diagnosis => Some(Factor::Diagnosis),
            FormField::Ovulation => Some(Factor::Ovulation),
            FormField::Stress => Some(Factor::Stress),
            FormField::Sleep => Some(Factor::Sleep),
            FormField::Diet => Some(Factor::Diet),
            FormField::Substance => Some(Factor::Substance),
            FormField::FamilyHistory => Some(Factor::FamilyHistory),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FormField::Age | FormField::Weight | FormField::Height | FormField::MarriageYears
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
    Breakdown,
}

pub struct App {
    pub input: InputRecord,
    pub result: ScoreResult,
    /// Startup record (built-in defaults overlaid with config), for reset.
    pub initial: InputRecord,
    pub table_state: ratatui::widgets::TableState,
    pub input_mode: InputMode,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl App {
    pub fn new(initial: InputRecord) -> Self {
        let result = compute_score(&initial);
        let mut table_state = ratatui::widgets::TableState::default();
        table_state.select(Some(0));

        Self {
            input: initial.clone(),
            result,
            initial,
            table_state,
            input_mode: InputMode::Normal,
            flash_message: None,
            should_quit: false,
        }
    }

    pub fn selected_field(&self) -> FormField {
        let idx = self.table_state.selected().unwrap_or(0);
        FormField::ALL[idx.min(FormField::ALL.len() - 1)]
    }

    pub fn next_field(&mut self) {
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= FormField::ALL.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_field(&mut self) {
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    FormField::ALL.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Adjust the selected field. Numeric fields move by `delta` and clamp to
    /// their domain; categorical fields cycle one step in the sign direction.
    /// Recomputes the result from scratch after the edit.
    pub fn adjust(&mut self, delta: i32) {
        let field = self.selected_field();
        match field {
            FormField::Age => self.input.age = step(&AGE_RANGE, self.input.age, delta),
            FormField::Weight => self.input.weight = step(&WEIGHT_RANGE, self.input.weight, delta),
            FormField::Height => self.input.height = step(&HEIGHT_RANGE, self.input.height, delta),
            FormField::MarriageYears => {
                self.input.marriage_years =
                    step(&MARRIAGE_YEARS_RANGE, self.input.marriage_years, delta)
            }
            FormField::Lifestyle => {
                self.input.lifestyle = cycle(self.input.lifestyle, delta, |v| v.next(), |v| v.prev())
            }
            FormField::Menstruation => {
                self.input.menstruation =
                    cycle(self.input.menstruation, delta, |v| v.next(), |v| v.prev())
            }
            FormField::SexFrequency => {
                self.input.sex_frequency =
                    cycle(self.input.sex_frequency, delta, |v| v.next(), |v| v.prev())
            }
            FormField::Diagnosis => {
                self.input.diagnosis = cycle(self.input.diagnosis, delta, |v| v.next(), |v| v.prev())
            }
            FormField::Ovulation => {
                self.input.ovulation = cycle(self.input.ovulation, delta, |v| v.next(), |v| v.prev())
            }
            FormField::Stress => {
                self.input.stress = cycle(self.input.stress, delta, |v| v.next(), |v| v.prev())
            }
            FormField::Sleep => {
                self.input.sleep = cycle(self.input.sleep, delta, |v| v.next(), |v| v.prev())
            }
            FormField::Diet => {
                self.input.diet = cycle(self.input.diet, delta, |v| v.next(), |v| v.prev())
            }
            FormField::Substance => {
                self.input.substance = cycle(self.input.substance, delta, |v| v.next(), |v| v.prev())
            }
            FormField::FamilyHistory => {
                self.input.family_history =
                    cycle(self.input.family_history, delta, |v| v.next(), |v| v.prev())
            }
        }
        self.recompute();
    }

    /// Restore the startup record.
    pub fn reset(&mut self) {
        self.input = self.initial.clone();
        self.recompute();
        self.show_flash("Reset to defaults".to_string());
    }

    fn recompute(&mut self) {
        self.result = compute_score(&self.input);
    }

    /// Current display value for a field.
    pub fn field_value(&self, field: FormField) -> String {
        match field {
            FormField::Age => self.input.age.to_string(),
            FormField::Weight => self.input.weight.to_string(),
            FormField::Height => self.input.height.to_string(),
            FormField::MarriageYears => self.input.marriage_years.to_string(),
            FormField::Lifestyle => self.input.lifestyle.to_string(),
            FormField::Menstruation => self.input.menstruation.to_string(),
            FormField::SexFrequency => self.input.sex_frequency.to_string(),
            FormField::Diagnosis => self.input.diagnosis.to_string(),
            FormField::Ovulation => self.input.ovulation.to_string(),
            FormField::Stress => self.input.stress.to_string(),
            FormField::Sleep => self.input.sleep.to_string(),
            FormField::Diet => self.input.diet.to_string(),
            FormField::Substance => self.input.substance.to_string(),
            FormField::FamilyHistory => self.input.family_history.to_string(),
        }
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn toggle_breakdown(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Breakdown => InputMode::Normal,
            _ => InputMode::Breakdown,
        };
    }
}

fn step(range: &std::ops::RangeInclusive<u32>, value: u32, delta: i32) -> u32 {
    let moved = (i64::from(value) + i64::from(delta)).max(0) as u32;
    clamp_to(range, moved)
}

fn cycle<T: Copy>(value: T, delta: i32, next: impl Fn(T) -> T, prev: impl Fn(T) -> T) -> T {
    if delta >= 0 {
        next(value)
    } else {
        prev(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Lifestyle, Stress};
    use crate::scoring::Band;

    fn app() -> App {
        App::new(InputRecord::default())
    }

    fn select(app: &mut App, field: FormField) {
        let idx = FormField::ALL.iter().position(|f| *f == field).unwrap();
        app.table_state.select(Some(idx));
    }

    #[test]
    fn test_new_app_scores_initial_record() {
        let app = app();
        assert_eq!(app.result.total, 39);
        assert_eq!(app.result.band, Band::Green);
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut app = app();
        app.previous_field();
        assert_eq!(app.selected_field(), FormField::FamilyHistory);
        app.next_field();
        assert_eq!(app.selected_field(), FormField::Age);
    }

    #[test]
    fn test_numeric_adjust_clamps_at_both_ends() {
        let mut app = app();
        select(&mut app, FormField::Age);
        for _ in 0..100 {
            app.adjust(1);
        }
        assert_eq!(app.input.age, 60);
        for _ in 0..100 {
            app.adjust(-1);
        }
        assert_eq!(app.input.age, 18);
    }

    #[test]
    fn test_adjust_recomputes_result() {
        let mut app = app();
        select(&mut app, FormField::Age);
        // 30 -> 35 keeps 2 points off the total (3 -> 2)
        app.adjust(5);
        assert_eq!(app.input.age, 35);
        assert_eq!(app.result.total, 38);
        assert_eq!(app.result.points(Factor::Age), 2);
    }

    #[test]
    fn test_categorical_adjust_cycles_and_wraps() {
        let mut app = app();
        select(&mut app, FormField::Stress);
        app.adjust(-1);
        assert_eq!(app.input.stress, Stress::Severe);
        assert_eq!(app.result.points(Factor::Stress), 0);
        app.adjust(1);
        assert_eq!(app.input.stress, Stress::Low);
        assert_eq!(app.result.total, 39);
    }

    #[test]
    fn test_weight_adjust_moves_bmi_factor() {
        let mut app = app();
        select(&mut app, FormField::Weight);
        // 70 -> 60 kg at 170 cm: bmi 20.8 -> 1 point
        for _ in 0..10 {
            app.adjust(-1);
        }
        assert_eq!(app.input.weight, 60);
        assert_eq!(app.result.points(Factor::Bmi), 1);
        assert_eq!(app.result.total, 37);
    }

    #[test]
    fn test_reset_restores_initial_record() {
        let initial = InputRecord {
            age: 34,
            lifestyle: Lifestyle::Moderate,
            ..InputRecord::default()
        };
        let mut app = App::new(initial.clone());
        select(&mut app, FormField::Age);
        app.adjust(10);
        select(&mut app, FormField::Lifestyle);
        app.adjust(1);
        assert_ne!(app.input, initial);

        app.reset();
        assert_eq!(app.input, initial);
        assert_eq!(app.result.total, compute_score(&initial).total);
        assert!(app.flash_message.is_some());
    }

    #[test]
    fn test_breakdown_toggles() {
        let mut app = app();
        app.toggle_breakdown();
        assert_eq!(app.input_mode, InputMode::Breakdown);
        app.toggle_breakdown();
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
