//! Configuration system for the attrition predictor.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod assets_config;
pub mod attrition_config;
pub mod report_config;

pub use assets_config::AssetsConfig;
pub use attrition_config::{AttritionConfig, CliOverrides};
pub use report_config::ReportConfig;
