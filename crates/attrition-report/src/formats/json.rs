//! JSON output format.

use crate::report::Report;

/// JSON formatter for scripted consumers.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Pretty-printed JSON, terminated by a newline.
    pub fn format(&self, report: &Report) -> String {
        match serde_json::to_string_pretty(report) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(e) => {
                tracing::error!(error = %e, "report serialization failed");
                format!("{}\n", serde_json::json!({ "status": "error", "error": e.to_string() }))
            }
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
