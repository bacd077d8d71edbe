//! Top-level acmop configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GeometryConfig, SearchConfig, VariantConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;
use crate::models::ConfigurationMode;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ACMOP_*`)
/// 3. Project config (`acmop.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AcmopConfig {
    pub geometry: GeometryConfig,
    pub search: SearchConfig,
    pub variant: VariantConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub mode: Option<String>,
    pub specified_stack_length_mm: Option<f64>,
    pub flag_optimization: Option<bool>,
}

impl AcmopConfig {
    /// Load configuration with 3-layer resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            debug!(path = %project_config_path.display(), "project config merged");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
            debug!(?cli, "cli overrides applied");
        }

        Self::validate(&config)?;
        debug!(mode = ?config.geometry.mode, bounds = config.search.bounds.len(), "config resolved");

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// The configured topology mode, if one is set.
    pub fn mode(&self) -> Result<Option<ConfigurationMode>, ConfigError> {
        self.geometry
            .mode
            .as_deref()
            .map(|m| {
                m.parse::<ConfigurationMode>()
                    .map_err(|e| ConfigError::InvalidValue {
                        field: "geometry.mode".to_string(),
                        message: e.to_string(),
                    })
            })
            .transpose()
    }

    /// Validate the configuration values.
    pub fn validate(config: &AcmopConfig) -> Result<(), ConfigError> {
        config.mode()?;
        if let Some(gravity) = config.variant.gravity {
            if !(gravity.is_finite() && gravity > 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "variant.gravity".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(stack) = config.variant.specified_stack_length_mm {
            if !(stack.is_finite() && stack > 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "variant.specified_stack_length_mm".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        for (name, bounds) in &config.search.bounds {
            if !bounds.is_valid() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("search.bounds.{name}"),
                    message: format!(
                        "lower bound {} must not exceed upper bound {}",
                        bounds.lower, bounds.upper
                    ),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut AcmopConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AcmopConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut AcmopConfig, other: &AcmopConfig) {
        if other.geometry.mode.is_some() {
            base.geometry.mode = other.geometry.mode.clone();
        }
        for (name, bounds) in &other.search.bounds {
            base.search.bounds.insert(name.clone(), *bounds);
        }
        if other.variant.gravity.is_some() {
            base.variant.gravity = other.variant.gravity;
        }
        if other.variant.specified_stack_length_mm.is_some() {
            base.variant.specified_stack_length_mm = other.variant.specified_stack_length_mm;
        }
        if other.variant.flag_optimization.is_some() {
            base.variant.flag_optimization = other.variant.flag_optimization;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ACMOP_GEOMETRY_MODE`, `ACMOP_VARIANT_GRAVITY`, etc.
    fn apply_env_overrides(config: &mut AcmopConfig) {
        if let Ok(val) = std::env::var("ACMOP_GEOMETRY_MODE") {
            config.geometry.mode = Some(val);
        }
        if let Ok(val) = std::env::var("ACMOP_VARIANT_GRAVITY") {
            if let Ok(v) = val.parse::<f64>() {
                config.variant.gravity = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ACMOP_VARIANT_STACK_LENGTH_MM") {
            if let Ok(v) = val.parse::<f64>() {
                config.variant.specified_stack_length_mm = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ACMOP_VARIANT_FLAG_OPTIMIZATION") {
            if let Ok(v) = val.parse::<bool>() {
                config.variant.flag_optimization = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut AcmopConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.mode {
            config.geometry.mode = Some(v.clone());
        }
        if let Some(v) = cli.specified_stack_length_mm {
            config.variant.specified_stack_length_mm = Some(v);
        }
        if let Some(v) = cli.flag_optimization {
            config.variant.flag_optimization = Some(v);
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
