//! Model artifact locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Where the classifier and its column list are read from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssetsConfig {
    /// Serialized classifier. Default: `champion_model.json`.
    pub model_path: Option<String>,
    /// Ordered training column list. Default: `model_columns.json`.
    pub columns_path: Option<String>,
}

impl AssetsConfig {
    /// Returns the effective classifier path.
    pub fn effective_model_path(&self) -> PathBuf {
        PathBuf::from(
            self.model_path
                .as_deref()
                .unwrap_or(constants::DEFAULT_MODEL_PATH),
        )
    }

    /// Returns the effective column list path.
    pub fn effective_columns_path(&self) -> PathBuf {
        PathBuf::from(
            self.columns_path
                .as_deref()
                .unwrap_or(constants::DEFAULT_COLUMNS_PATH),
        )
    }
}
