//! Scenario input errors.

use super::error_code::{self, AttritionErrorCode};

/// A form value outside its allowed range.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("{field} = {value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl AttritionErrorCode for ScenarioError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_SCENARIO
    }
}
