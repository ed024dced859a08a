//! Markdown output format.

use crate::report::{Outcome, Report};

/// Markdown formatter for pasting into tickets and wikis.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, report: &Report) -> String {
        let mut md = String::new();
        md.push_str(&format!("# {}\n\n", report.title));
        if let Some(intro) =
            report.intro_with(|term| format!("**{}**", escape_markdown_inline(term)))
        {
            md.push_str(&intro);
            md.push_str("\n\n");
        }
        md.push_str("---\n\n");

        match &report.outcome {
            Outcome::Predicted(view) => {
                md.push_str(&format!("## {}\n\n", view.gauge.title));
                md.push_str(&format!(
                    "**{:.2}%** ({}, `{}`)\n\n",
                    view.gauge.value,
                    view.gauge.band.name(),
                    view.gauge.color
                ));

                md.push_str("## Prediction Result\n\n");
                let (lead, rest) = split_headline(view.verdict.headline);
                md.push_str(&format!("> **{lead}:**{rest}\n\n"));
                if view.verdict.key_factor.is_some() {
                    md.push_str(&format!(
                        "**Key Risk Factor:** The calculated **Incentive Ratio** is `{:.3}`.\n\n",
                        view.derived.incentive_ratio
                    ));
                }
                if let Some(insight) = view.verdict.insight {
                    md.push_str(&format!("*{insight}*\n\n"));
                }

                md.push_str("## Financial Impact Analysis\n\n");
                md.push_str(&format!(
                    "If this employee leaves, the estimated replacement cost is **{}**.\n",
                    view.cost.display
                ));
                md.push_str(&format!(
                    "*(Based on SHRM standard of {}x Annual Salary)*\n",
                    view.cost.multiplier
                ));
            }
            Outcome::Unavailable(view) => {
                md.push_str(&format!("> **Warning:** {}\n\n", view.warning));
                md.push_str(&format!("`{}` {}\n", view.code, escape_markdown_inline(&view.detail)));
            }
        }

        if let Some(ref footer) = report.footer {
            md.push_str(&format!("\n---\n\n*{}*\n", escape_markdown_inline(footer)));
        }
        md
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// `"High Risk: This ..."` → `("High Risk", " This ...")`.
fn split_headline(headline: &str) -> (&str, &str) {
    headline.split_once(':').unwrap_or((headline, ""))
}

/// Escape characters that would restyle text taken from artifacts.
fn escape_markdown_inline(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('*', "\\*")
        .replace('_', "\\_")
        .replace('`', "\\`")
        .replace('#', "\\#")
        .replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_splits_on_first_colon() {
        assert_eq!(
            split_headline("Safe: This employee is likely to stay."),
            ("Safe", " This employee is likely to stay.")
        );
        assert_eq!(split_headline("no colon"), ("no colon", ""));
    }

    #[test]
    fn artifact_text_cannot_inject_markup() {
        let escaped = escape_markdown_inline("## *Boosted*\n_model_");
        assert!(!escaped.contains('\n'));
        assert_eq!(escaped, "\\#\\# \\*Boosted\\* \\_model\\_");
    }
}
