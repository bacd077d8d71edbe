//! Variant construction errors.

use super::error_code::{self, AcmopErrorCode};
use super::{ConfigError, GeometryError};

/// Errors that can occur while building a variant from a template.
#[derive(Debug, thiserror::Error)]
pub enum VariantError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("{collaborator} failed: {message}")]
    Collaborator {
        collaborator: &'static str,
        message: String,
    },

    #[error("geometry value {name} is required but unset")]
    MissingGeometry { name: String },

    #[error("spec input rejected for {field}: {message}")]
    InvalidSpec { field: String, message: String },

    #[error("speed override ({rpm} rpm) is not supported")]
    SpeedOverrideUnsupported { rpm: f64 },
}

impl VariantError {
    /// True when the failure belongs to the candidate, not the setup.
    pub fn is_infeasible(&self) -> bool {
        match self {
            Self::Geometry(e) => e.is_infeasible(),
            _ => false,
        }
    }
}

impl AcmopErrorCode for VariantError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Geometry(e) => e.error_code(),
            Self::Collaborator { .. } => error_code::COLLABORATOR_ERROR,
            Self::MissingGeometry { .. } => error_code::MISSING_GEOMETRY,
            Self::InvalidSpec { .. } => error_code::CONFIG_ERROR,
            Self::SpeedOverrideUnsupported { .. } => error_code::NOT_SUPPORTED,
        }
    }
}

impl From<ConfigError> for VariantError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::ValidationFailed { field, message }
            | ConfigError::InvalidValue { field, message } => Self::InvalidSpec { field, message },
            ConfigError::ParseError { path, message } => Self::InvalidSpec {
                field: path,
                message,
            },
            ConfigError::FileNotFound { path } => Self::InvalidSpec {
                field: path,
                message: "file not found".to_string(),
            },
        }
    }
}
