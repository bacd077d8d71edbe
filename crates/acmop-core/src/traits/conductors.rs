//! Conductors-per-slot estimator.

use crate::errors::VariantError;
use crate::models::SpecInput;

use super::WindingLayout;

/// Geometry handed to the conductor estimator, in metres.
#[derive(Debug, Clone, Copy)]
pub struct SlotConductorQuery {
    pub stator_inner_diameter_m: f64,
    pub rotor_outer_diameter_m: f64,
    /// Caller-specified stack length, when the estimator was bypassed.
    pub specified_stack_length_mm: Option<f64>,
}

/// Estimates the number of conductors per slot (zQ).
pub trait SlotConductorEstimator: Send + Sync {
    fn conductors_per_slot(
        &self,
        spec: &SpecInput,
        layout: &WindingLayout,
        query: &SlotConductorQuery,
    ) -> Result<f64, VariantError>;
}

/// Returns a constant conductor count.
#[derive(Debug, Clone, Copy)]
pub struct FixedSlotConductors(pub f64);

impl SlotConductorEstimator for FixedSlotConductors {
    fn conductors_per_slot(
        &self,
        _spec: &SpecInput,
        _layout: &WindingLayout,
        _query: &SlotConductorQuery,
    ) -> Result<f64, VariantError> {
        Ok(self.0)
    }
}
