//! Shared constants for the attrition predictor.

// ---- Artifacts ----

/// Default location of the serialized classifier.
pub const DEFAULT_MODEL_PATH: &str = "champion_model.json";

/// Default location of the serialized training column list.
pub const DEFAULT_COLUMNS_PATH: &str = "model_columns.json";

// ---- Config files ----

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "attrition.toml";

/// User-level config directory name under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".attrition";

// ---- Report ----

/// Default report output format.
pub const DEFAULT_REPORT_FORMAT: &str = "text";

/// Report output formats understood by the renderer.
pub const REPORT_FORMATS: [&str; 3] = ["text", "markdown", "json"];

/// Default currency symbol for the replacement-cost figure.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
