//! Geometry errors: registry construction, derivation, and search space.

use super::error_code::{self, AcmopErrorCode};
use crate::models::snapshot::{render_snapshot, SnapshotEntry};

/// Errors raised while building, resolving, or vectorizing a registry.
///
/// Three families with different propagation rules:
/// - configuration errors abort the whole run,
/// - resolution errors mark one candidate infeasible,
/// - a vector length mismatch is a caller bug.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeometryError {
    #[error("unrecognized configuration mode: {mode}")]
    UnknownMode { mode: String },

    #[error("derived parameter {name} has no calc function")]
    MissingCalc { name: String },

    #[error("free parameter {name} has no bounds")]
    MissingBounds { name: String },

    #[error("invalid bounds for {name}: [{lower}, {upper}]")]
    InvalidBounds { name: String, lower: f64, upper: f64 },

    #[error("duplicate parameter name: {name}")]
    DuplicateParameter { name: String },

    #[error("unknown parameter: {name}")]
    UnknownParameter { name: String },

    #[error("free parameter {name} has no value")]
    UnsetFreeParameter { name: String },

    #[error("derived parameters left unresolved: {}", .unresolved.join(", "))]
    DependencyUnresolved { unresolved: Vec<String> },

    #[error("derived parameter {name} resolved to non-positive value {value}\n{}", render_snapshot(.snapshot))]
    NonPositiveDerivedValue {
        name: String,
        value: f64,
        snapshot: Vec<SnapshotEntry>,
    },

    #[error("derived parameter {name} resolved to non-finite value {value}\n{}", render_snapshot(.snapshot))]
    NonFiniteDerivedValue {
        name: String,
        value: f64,
        snapshot: Vec<SnapshotEntry>,
    },

    #[error("candidate vector has {actual} entries, expected {expected} free parameters")]
    VectorLengthMismatch { expected: usize, actual: usize },
}

impl GeometryError {
    /// Construction/setup-time failure; no sensible fallback exists.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownMode { .. }
                | Self::MissingCalc { .. }
                | Self::MissingBounds { .. }
                | Self::InvalidBounds { .. }
                | Self::DuplicateParameter { .. }
                | Self::UnknownParameter { .. }
                | Self::UnsetFreeParameter { .. }
        )
    }

    /// Candidate-local failure: the optimizer should score the candidate
    /// as infeasible and keep going.
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            Self::DependencyUnresolved { .. }
                | Self::NonPositiveDerivedValue { .. }
                | Self::NonFiniteDerivedValue { .. }
        )
    }

    /// Caller broke the vector contract.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::VectorLengthMismatch { .. })
    }
}

impl AcmopErrorCode for GeometryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DependencyUnresolved { .. } => error_code::DEPENDENCY_UNRESOLVED,
            Self::NonPositiveDerivedValue { .. } => error_code::NON_POSITIVE_DERIVED_VALUE,
            Self::NonFiniteDerivedValue { .. } => error_code::NON_FINITE_DERIVED_VALUE,
            Self::VectorLengthMismatch { .. } => error_code::VECTOR_LENGTH_MISMATCH,
            _ => error_code::CONFIGURATION_ERROR,
        }
    }
}
