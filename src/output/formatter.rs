use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::input::InputRecord;
use crate::scoring::{Band, ScoreResult, MAX_TOTAL};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the result summary: derived BMI, total with a gauge, band badge.
pub fn format_summary(result: &ScoreResult, use_colors: bool) -> String {
    let gauge = total_gauge(result.total, gauge_width());
    format!(
        "BMI:   {:.1}\nScore: {:>2} / {}  {}\nBand:  {}",
        result.bmi,
        result.total,
        MAX_TOTAL,
        gauge,
        format_band(result.band, use_colors)
    )
}

/// Format the per-factor breakdown as aligned rows:
/// `{factor}  {value}  {points} {bar}`
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    result
        .parts
        .iter()
        .map(|part| {
            let bar = points_bar(part.points);
            let row = format!(
                "{:<14} {:<22} {}/3 {}",
                part.factor.name(),
                part.value,
                part.points,
                bar
            );
            if use_colors && part.points == 0 {
                row.red().to_string()
            } else {
                row
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colored band badge. Falls back to the bare label when colors are off.
pub fn format_band(band: Band, use_colors: bool) -> String {
    if !use_colors {
        return band.label().to_string();
    }
    match band {
        Band::Green => band.label().green().bold().to_string(),
        Band::Blue => band.label().blue().bold().to_string(),
        Band::Orange => band.label().truecolor(255, 135, 0).bold().to_string(),
        Band::Red => band.label().red().bold().to_string(),
        Band::Black => band.label().bold().to_string(),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a InputRecord,
    #[serde(flatten)]
    result: &'a ScoreResult,
}

/// Machine-readable report: input echo plus parts, bmi, total, and band.
pub fn format_json(input: &InputRecord, result: &ScoreResult) -> anyhow::Result<String> {
    let report = JsonReport { input, result };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Three-slot bar for a sub-score: `███`, `██░`, ...
fn points_bar(points: u8) -> String {
    let filled = (points as usize).min(3);
    format!("{}{}", "█".repeat(filled), "░".repeat(3 - filled))
}

/// Gauge over the full 0..=39 range.
fn total_gauge(total: u8, width: usize) -> String {
    let ratio = f64::from(total.min(MAX_TOTAL)) / f64::from(MAX_TOTAL);
    let filled = (ratio * width as f64).round() as usize;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(width.saturating_sub(filled))
    )
}

/// Gauge width, shrunk on narrow terminals. Pipes get the full width.
fn gauge_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) if (w as usize) < 60 => 10,
        _ => 26,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::compute_score;

    #[test]
    fn test_summary_contains_total_and_band() {
        let input = InputRecord::default();
        let result = compute_score(&input);
        let summary = format_summary(&result, false);
        assert!(summary.contains("39 / 39"));
        assert!(summary.contains("Green"));
        assert!(summary.contains("24.2"));
    }

    #[test]
    fn test_breakdown_lists_all_factors() {
        let result = compute_score(&InputRecord::default());
        let breakdown = format_breakdown(&result, false);
        assert_eq!(breakdown.lines().count(), 13);
        assert!(breakdown.contains("familyHistory"));
        assert!(breakdown.contains("No history"));
        assert!(breakdown.contains("3/3"));
    }

    #[test]
    fn test_band_badge_without_colors_is_bare_label() {
        assert_eq!(format_band(Band::Orange, false), "Orange");
    }

    #[test]
    fn test_points_bar_shapes() {
        assert_eq!(points_bar(3), "███");
        assert_eq!(points_bar(1), "█░░");
        assert_eq!(points_bar(0), "░░░");
    }

    #[test]
    fn test_json_report_shape() {
        let input = InputRecord::default();
        let result = compute_score(&input);
        let json = format_json(&input, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 39);
        assert_eq!(value["band"], "Green");
        assert_eq!(value["bmi"], 24.2);
        assert_eq!(value["input"]["lifestyle"], "Active");
        assert_eq!(value["parts"].as_array().unwrap().len(), 13);
        assert_eq!(value["parts"][0]["factor"], "age");
        assert_eq!(value["parts"][0]["points"], 3);
    }
}
