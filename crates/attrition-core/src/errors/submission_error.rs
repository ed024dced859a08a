//! Submission errors.

use super::error_code::AttritionErrorCode;
use super::{AssetError, ConfigError, InferenceError, ScenarioError, SchemaError};

/// Errors that can fail one submit-to-render cycle.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Asset error: {0}")]
    Assets(#[from] AssetError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),
}

impl AttritionErrorCode for SubmissionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Assets(e) => e.error_code(),
            Self::Schema(e) => e.error_code(),
            Self::Scenario(e) => e.error_code(),
            Self::Inference(e) => e.error_code(),
        }
    }
}
