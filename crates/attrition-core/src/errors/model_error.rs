//! Classifier artifact defects detected while compiling a model.

use super::error_code::{self, AttritionErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Tree ensemble has no trees")]
    EmptyEnsemble,

    #[error("Tree {tree} has no node {node}")]
    MissingNode { tree: usize, node: u32 },

    #[error("Tree {tree} reaches node {node} more than once")]
    TreeCycle { tree: usize, node: u32 },

    #[error("Base score {value} must lie strictly between 0 and 1")]
    InvalidBaseScore { value: f64 },

    #[error("Decision threshold {value} must lie between 0 and 1")]
    InvalidThreshold { value: f64 },

    #[error("Parameter {name} is not a finite number")]
    NonFiniteParameter { name: String },
}

impl AttritionErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_MODEL
    }
}
