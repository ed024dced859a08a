//! Plain-text output format for terminals.

use crate::gauge::{Gauge, HIGH_RISK_FROM, MEDIUM_RISK_FROM};
use crate::report::{Outcome, Report};

/// Gauge bar width in characters; each cell is 2 percentage points.
const BAR_WIDTH: usize = 50;

/// Terminal formatter. The gauge is drawn as a bar with the band edges
/// marked on a scale underneath.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, report: &Report) -> String {
        let mut out = String::new();
        out.push_str(report.app);
        out.push('\n');
        out.push_str(report.title);
        out.push('\n');
        out.push_str(&"=".repeat(report.title.chars().count()));
        out.push('\n');
        if let Some(intro) = report.intro() {
            out.push_str(&intro);
            out.push('\n');
        }
        out.push('\n');

        match &report.outcome {
            Outcome::Predicted(view) => {
                out.push_str(view.gauge.title);
                out.push('\n');
                out.push_str(&gauge_bar(&view.gauge));
                out.push('\n');
                out.push_str(&gauge_scale());
                out.push_str("\n\n");

                out.push_str("Prediction Result\n");
                out.push_str(&format!("  {}\n", view.verdict.headline));
                if let Some(ref factor) = view.verdict.key_factor {
                    out.push_str(&format!("  Key Risk Factor: {factor}\n"));
                }
                if let Some(insight) = view.verdict.insight {
                    out.push_str(&format!("  {insight}\n"));
                }
                out.push('\n');

                out.push_str("Financial Impact Analysis\n");
                out.push_str(&format!(
                    "  If this employee leaves, the estimated replacement cost is {}.\n",
                    view.cost.display
                ));
                out.push_str(&format!(
                    "  (Based on SHRM standard of {}x Annual Salary)\n",
                    view.cost.multiplier
                ));
            }
            Outcome::Unavailable(view) => {
                out.push_str(&format!("Warning: {}\n", view.warning));
                out.push_str(&format!("  [{}] {}\n", view.code, view.detail));
            }
        }

        if let Some(ref footer) = report.footer {
            out.push_str("\n---\n");
            out.push_str(footer);
            out.push('\n');
        }
        out
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn gauge_bar(gauge: &Gauge) -> String {
    let filled = ((gauge.value / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}] {:6.2}%  {} ({})",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        gauge.value,
        gauge.band.name(),
        gauge.color
    )
}

/// `0`, `40`, `70`, `100` under their positions on the bar.
fn gauge_scale() -> String {
    let mut cells = vec![' '; BAR_WIDTH + 2];
    let marks = [
        (0.0, "0"),
        (MEDIUM_RISK_FROM, "40"),
        (HIGH_RISK_FROM, "70"),
        (100.0, "100"),
    ];
    for (value, label) in marks {
        let column = 1 + ((value / 100.0) * BAR_WIDTH as f64).round() as usize;
        // The last label ends on the closing bracket.
        let start = if value >= 100.0 {
            column + 1 - label.len()
        } else {
            column
        };
        for (offset, ch) in label.chars().enumerate() {
            if let Some(cell) = cells.get_mut(start + offset) {
                *cell = ch;
            }
        }
    }
    cells.into_iter().collect::<String>().trim_end().to_string()
}
