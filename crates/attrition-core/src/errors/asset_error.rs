//! Model artifact errors.

use super::error_code::{self, AttritionErrorCode};
use super::{ModelError, SchemaError};

/// Errors that leave the model assets unavailable.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Model artifact not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read model artifact {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to deserialize model artifact {path}: {message}")]
    Deserialize { path: String, message: String },

    #[error("Model artifact {path} is malformed: {source}")]
    Invalid {
        path: String,
        #[source]
        source: ModelError,
    },

    #[error("Column list {path} is not a usable feature schema: {source}")]
    InvalidColumns {
        path: String,
        #[source]
        source: SchemaError,
    },

    #[error("Model artifact {path} does not match its column list: {source}")]
    Incompatible {
        path: String,
        #[source]
        source: SchemaError,
    },
}

impl AssetError {
    /// True when the artifacts exist but disagree about columns.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, Self::Incompatible { .. } | Self::InvalidColumns { .. })
    }
}

impl AttritionErrorCode for AssetError {
    fn error_code(&self) -> &'static str {
        if self.is_schema_mismatch() {
            error_code::SCHEMA_MISMATCH
        } else {
            error_code::ASSETS_UNAVAILABLE
        }
    }
}
