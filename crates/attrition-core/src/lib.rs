//! # attrition-core
//!
//! Foundation crate for the attrition predictor.
//! Defines errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::AttritionConfig;
pub use errors::{AttritionErrorCode, SubmissionError};
