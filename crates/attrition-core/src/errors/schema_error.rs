//! Feature schema errors.
//!
//! These are configuration defects, never user errors: a submission that
//! hits one fails instead of producing a silently wrong prediction.

use super::error_code::{self, AttritionErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Feature schema is empty")]
    Empty,

    #[error("Feature schema column {index} has an empty name")]
    EmptyColumnName { index: usize },

    #[error("Feature schema lists column '{column}' more than once")]
    DuplicateColumn { column: String },

    #[error("Column '{column}' is not part of the feature schema")]
    MissingColumn { column: String },

    #[error("Classifier references unknown feature '{feature}'")]
    UnknownFeature { feature: String },

    #[error("Column {position} is '{found}' where the schema has '{expected}'")]
    ColumnOrder {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("Expected {expected} feature columns, found {found}")]
    WidthMismatch { expected: usize, found: usize },
}

impl AttritionErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        error_code::SCHEMA_MISMATCH
    }
}
