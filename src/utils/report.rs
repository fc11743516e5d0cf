use anyhow::{Context, Result};
use serde_json::to_string_pretty;
use crate::models::{CgpaResult, GradeBand};

// Row marker matching the colour the results view gave each band.
fn band_marker(band: GradeBand) -> &'static str {
    match band {
        GradeBand::Excellent => "🟢",
        GradeBand::Good => "🔵",
        GradeBand::Satisfactory => "🟡",
        GradeBand::Pass => "🟠",
        GradeBand::Fail => "🔴",
    }
}

// Two decimals at most, trailing zeros dropped, so float sums like 3.3000000000000003 read as 3.3.
pub fn format_credit_hours(credit_hours: f64) -> String {
    let formatted = format!("{:.2}", credit_hours);
    formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}

// Renders the per-subject breakdown followed by the CGPA and total credit hours.
pub fn format_results(result: &CgpaResult) -> String {
    if result.grade_details.is_empty() {
        return String::from("No subjects with credit hours, CGPA: 0.00\n");
    }

    let mut message = String::from("📊 Grade Details\n\n");
    message.push_str(&format!(
        "   {:<4} {:>12} {:>8} {:>6} {:>6}\n",
        "#", "Credit Hours", "Marks %", "Grade", "GP"
    ));
    for (index, detail) in result.grade_details.iter().enumerate() {
        message.push_str(&format!(
            "{} {:<4} {:>12} {:>8.0} {:>6} {:>6.2}\n",
            band_marker(detail.letter_grade.band()),
            index + 1,
            format_credit_hours(detail.credit_hours),
            detail.marks,
            detail.letter_grade.as_str(),
            detail.grade_point
        ));
    }
    message.push_str(&format!("\nCGPA: {:.2}\n", result.cgpa));
    message.push_str(&format!(
        "Total Credit Hours: {}\n",
        format_credit_hours(result.total_credit_hours)
    ));
    message
}

// Pretty JSON with the calculator's field names.
pub fn format_json(result: &CgpaResult) -> Result<String> {
    to_string_pretty(result).context("Failed to serialize results")
}
