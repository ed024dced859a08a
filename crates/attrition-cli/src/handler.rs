//! The submit handler: one scenario in, one rendered report out.

use std::path::Path;

use attrition_core::config::ReportConfig;
use attrition_core::errors::{ConfigError, SubmissionError};
use attrition_core::AttritionConfig;
use attrition_model::{AssetState, ScenarioInput};
use attrition_report::{render, Report, ReportFormat};

use crate::cli::Cli;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_ASSETS_UNAVAILABLE: i32 = 2;

/// A rendered report and the exit code that goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub output: String,
    pub exit_code: i32,
}

/// Layered config for this invocation, rooted at `root`.
pub fn resolve_config(root: &Path, cli: &Cli) -> Result<AttritionConfig, ConfigError> {
    AttritionConfig::load(root, cli.config.as_deref(), Some(&cli.overrides()))
}

/// Run one submission against `state`.
///
/// Unavailable assets still produce a report: the warning. A column
/// disagreement between the artifacts renders the same warning but
/// exits with `EXIT_FAILURE`, since a copy of the files will not fix it.
pub fn submit(
    state: &AssetState,
    scenario: &ScenarioInput,
    config: &ReportConfig,
) -> Result<Submission, SubmissionError> {
    let format = report_format(config)?;

    let assets = match state {
        AssetState::Loaded(assets) => assets,
        AssetState::Unavailable(err) => {
            let exit_code = if err.is_schema_mismatch() {
                tracing::error!(error = %err, "model artifacts disagree about columns");
                EXIT_FAILURE
            } else {
                EXIT_ASSETS_UNAVAILABLE
            };
            return Ok(Submission {
                output: render(&Report::unavailable(err), format),
                exit_code,
            });
        }
    };

    let result = assets.predict(scenario)?;
    let report = Report::predicted(&result, assets.classifier().name(), config);
    tracing::info!(
        label = ?result.prediction.label,
        probability = result.prediction.probability,
        format = %format,
        "submission rendered"
    );

    Ok(Submission {
        output: render(&report, format),
        exit_code: EXIT_OK,
    })
}

fn report_format(config: &ReportConfig) -> Result<ReportFormat, ConfigError> {
    config
        .effective_format()
        .parse()
        .map_err(|message| ConfigError::ValidationFailed {
            field: "report.format".to_string(),
            message,
        })
}
