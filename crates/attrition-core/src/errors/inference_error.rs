//! Inference errors.

use super::error_code::{self, AttritionErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Model assets are unavailable: {reason}")]
    AssetsUnavailable { reason: String },

    #[error("Classifier produced a non-finite margin")]
    NonFiniteMargin,
}

impl AttritionErrorCode for InferenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::AssetsUnavailable { .. } => error_code::ASSETS_UNAVAILABLE,
            _ => error_code::INFERENCE_ERROR,
        }
    }
}
