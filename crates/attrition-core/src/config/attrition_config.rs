//! Top-level attrition configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AssetsConfig, ReportConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ATTRITION_*`)
/// 3. Project config (`attrition.toml` in the working directory, or an explicit file)
/// 4. User config (`~/.attrition/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AttritionConfig {
    pub assets: AssetsConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub model_path: Option<String>,
    pub columns_path: Option<String>,
    pub report_format: Option<String>,
}

impl AttritionConfig {
    /// Load configuration with layered resolution.
    ///
    /// `config_file` replaces the project layer. Unlike the implicit
    /// `attrition.toml`, an explicit file must exist.
    pub fn load(
        root: &Path,
        config_file: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        match config_file {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            model_path = %config.assets.effective_model_path().display(),
            columns_path = %config.assets.effective_columns_path().display(),
            format = config.report.effective_format(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &AttritionConfig) -> Result<(), ConfigError> {
        if let Some(ref path) = config.assets.model_path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "assets.model_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref path) = config.assets.columns_path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "assets.columns_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref format) = config.report.format {
            if !constants::REPORT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "report.format".to_string(),
                    message: format!(
                        "unknown format '{format}', expected one of {}",
                        constants::REPORT_FORMATS.join(", ")
                    ),
                });
            }
        }
        if let Some(ref symbol) = config.report.currency_symbol {
            if symbol.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "report.currency_symbol".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.attrition/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut AttritionConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: AttritionConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut AttritionConfig, other: &AttritionConfig) {
        // Assets
        if other.assets.model_path.is_some() {
            base.assets.model_path = other.assets.model_path.clone();
        }
        if other.assets.columns_path.is_some() {
            base.assets.columns_path = other.assets.columns_path.clone();
        }

        // Report
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
        if other.report.currency_symbol.is_some() {
            base.report.currency_symbol = other.report.currency_symbol.clone();
        }
        if other.report.show_footer.is_some() {
            base.report.show_footer = other.report.show_footer;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ATTRITION_MODEL_PATH`, `ATTRITION_REPORT_FORMAT`, etc.
    fn apply_env_overrides(config: &mut AttritionConfig) {
        if let Ok(val) = std::env::var("ATTRITION_MODEL_PATH") {
            config.assets.model_path = Some(val);
        }
        if let Ok(val) = std::env::var("ATTRITION_COLUMNS_PATH") {
            config.assets.columns_path = Some(val);
        }
        if let Ok(val) = std::env::var("ATTRITION_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut AttritionConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.model_path {
            config.assets.model_path = Some(v.clone());
        }
        if let Some(ref v) = cli.columns_path {
            config.assets.columns_path = Some(v.clone());
        }
        if let Some(ref v) = cli.report_format {
            config.report.format = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.attrition/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(constants::USER_CONFIG_DIR))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
