//! AttritionErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable code string
/// that survives message rewording.
pub trait AttritionErrorCode {
    /// Returns the error code string (e.g., "SCHEMA_MISMATCH").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const ASSETS_UNAVAILABLE: &str = "ASSETS_UNAVAILABLE";
pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";
pub const INVALID_SCENARIO: &str = "INVALID_SCENARIO";
pub const INFERENCE_ERROR: &str = "INFERENCE_ERROR";
pub const INVALID_MODEL: &str = "INVALID_MODEL";
