use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_GRAVITY;

/// Variant construction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    /// Gravitational acceleration for rotor weight (N/kg). Default: 9.8.
    pub gravity: Option<f64>,
    /// Stack length that bypasses the estimator (mm).
    pub specified_stack_length_mm: Option<f64>,
    /// Short individual names (`ID<n>`) while an optimization runs.
    pub flag_optimization: Option<bool>,
}

impl VariantConfig {
    pub fn effective_gravity(&self) -> f64 {
        self.gravity.unwrap_or(DEFAULT_GRAVITY)
    }

    pub fn is_optimizing(&self) -> bool {
        self.flag_optimization.unwrap_or(false)
    }
}
