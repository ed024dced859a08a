//! Error handling for the attrition predictor.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod asset_error;
pub mod config_error;
pub mod error_code;
pub mod inference_error;
pub mod model_error;
pub mod scenario_error;
pub mod schema_error;
pub mod submission_error;

pub use asset_error::AssetError;
pub use config_error::ConfigError;
pub use error_code::AttritionErrorCode;
pub use inference_error::InferenceError;
pub use model_error::ModelError;
pub use scenario_error::ScenarioError;
pub use schema_error::SchemaError;
pub use submission_error::SubmissionError;
