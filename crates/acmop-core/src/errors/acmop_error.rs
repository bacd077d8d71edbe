//! Top-level error aggregating every subsystem.

use super::error_code::AcmopErrorCode;
use super::{ConfigError, GeometryError, VariantError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AcmopError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Variant error: {0}")]
    Variant(#[from] VariantError),
}

impl AcmopErrorCode for AcmopError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Geometry(e) => e.error_code(),
            Self::Variant(e) => e.error_code(),
        }
    }
}

pub type AcmopResult<T> = Result<T, AcmopError>;
