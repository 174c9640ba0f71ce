//! Result rendering: headline, text sections, and the axis map.

use learnstyle_core::{Axis, AxisData, RespondentProfile};
use learnstyle_runtime::{AnalysisOutcome, AnalysisSource};

const BAR_WIDTH: usize = 20;

/// Print the full analysis to stdout.
pub fn render(profile: &RespondentProfile, outcome: &AnalysisOutcome) {
    let result = &outcome.result;

    println!();
    println!("==============================================");
    println!("{}, your learning style is: {}", profile.name, result.style);
    println!("==============================================");

    match outcome.source {
        AnalysisSource::Demonstration => {
            println!("(Demonstration result - no classifier credential configured.)");
        }
        AnalysisSource::Degraded => {
            println!("(The analysis service was unavailable; the chart below still reflects your answers.)");
        }
        AnalysisSource::Classifier => {}
    }

    println!("\n{}\n", result.description);

    println!("Your strengths:");
    for strength in &result.strengths {
        println!("  * {}", strength);
    }

    println!("\nStrategies for you:");
    for recommendation in &result.recommendations {
        println!("  * {}", recommendation);
    }

    println!("\nYour learning map:");
    for (label, score) in axis_rows(&result.axis_data) {
        println!("  {:<32} {} {:>3}", label, bar(score), score);
    }
    println!();
}

/// Axis rows in canonical order, labeled for display.
fn axis_rows(data: &AxisData) -> Vec<(String, u8)> {
    Axis::ALL
        .into_iter()
        .map(|axis| (format!("{} ({})", axis.label(), axis.code()), data.get(axis)))
        .collect()
}

/// A fixed-width text bar for a 0-100 score.
fn bar(score: u8) -> String {
    let filled = (score as usize * BAR_WIDTH).div_ceil(100).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_is_fixed_width() {
        for score in [0u8, 1, 38, 75, 100] {
            assert_eq!(bar(score).len(), BAR_WIDTH + 2);
        }
    }

    #[test]
    fn test_bar_extremes() {
        assert_eq!(bar(0), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(bar(100), format!("[{}]", "#".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_axis_rows_follow_canonical_order() {
        let data = AxisData { ce: 10, ro: 20, ac: 30, ae: 40 };
        let rows = axis_rows(&data);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].0, "Concrete Experience (CE)");
        assert_eq!(rows[0].1, 10);
        assert_eq!(rows[3].0, "Active Experimentation (AE)");
        assert_eq!(rows[3].1, 40);
    }
}
