//! Report rendering configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: `text`, `markdown` or `json`. Default: `text`.
    pub format: Option<String>,
    /// Symbol prefixed to the replacement-cost figure. Default: `$`.
    pub currency_symbol: Option<String>,
    /// Print the model footer under the report. Default: true.
    pub show_footer: Option<bool>,
}

impl ReportConfig {
    /// Returns the effective output format, defaulting to `text`.
    pub fn effective_format(&self) -> &str {
        self.format
            .as_deref()
            .unwrap_or(constants::DEFAULT_REPORT_FORMAT)
    }

    /// Returns the effective currency symbol, defaulting to `$`.
    pub fn effective_currency_symbol(&self) -> &str {
        self.currency_symbol
            .as_deref()
            .unwrap_or(constants::DEFAULT_CURRENCY_SYMBOL)
    }

    /// Returns whether the footer is shown, defaulting to true.
    pub fn effective_show_footer(&self) -> bool {
        self.show_footer.unwrap_or(true)
    }
}
