//! Stack-length estimator.

use crate::errors::VariantError;
use crate::models::SpecInput;

/// Estimates the axial stack length from the spec and the resolved rotor radius.
pub trait StackLengthEstimator: Send + Sync {
    /// Returns the stack length in millimetres.
    fn stack_length_mm(&self, spec: &SpecInput, rotor_radius_m: f64) -> Result<f64, VariantError>;
}

/// Always returns the same stack length.
#[derive(Debug, Clone, Copy)]
pub struct FixedStackLength(pub f64);

impl StackLengthEstimator for FixedStackLength {
    fn stack_length_mm(&self, _spec: &SpecInput, _rotor_radius_m: f64) -> Result<f64, VariantError> {
        Ok(self.0)
    }
}
