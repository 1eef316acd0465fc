/// Body-mass index from weight (kg) and height (cm), rounded to one decimal.
///
/// Returns `0.0` for a zero height instead of dividing by zero. No other
/// guarding; the form keeps both fields inside their domains.
pub fn compute_bmi(weight_kg: u32, height_cm: u32) -> f64 {
    let height_m = height_cm as f64 / 100.0;
    if height_m == 0.0 {
        return 0.0;
    }
    let bmi = weight_kg as f64 / (height_m * height_m);
    (bmi * 10.0).round() / 10.0
}
