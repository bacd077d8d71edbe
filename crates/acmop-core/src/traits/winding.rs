//! Winding-layout provider.

use serde::{Deserialize, Serialize};

use crate::errors::VariantError;
use crate::models::SpecInput;

/// Opaque winding-layout handle.
///
/// The geometry core stores and forwards it; only the simulation layer
/// reads `payload`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindingLayout {
    /// Short human-readable description (e.g. `dpnv Q24 p2 ps1 y5`).
    pub label: String,
    pub payload: serde_json::Value,
}

/// Computes a winding layout from the spec input.
pub trait WindingLayoutProvider: Send + Sync {
    fn layout(&self, spec: &SpecInput) -> Result<WindingLayout, VariantError>;
}

/// Records the winding inputs without computing coil assignments.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorWindingProvider;

impl WindingLayoutProvider for DescriptorWindingProvider {
    fn layout(&self, spec: &SpecInput) -> Result<WindingLayout, VariantError> {
        let scheme = serde_json::to_value(spec.winding_scheme).map_err(|e| {
            VariantError::Collaborator {
                collaborator: "winding layout",
                message: e.to_string(),
            }
        })?;
        Ok(WindingLayout {
            label: format!(
                "{} Q{} p{} ps{} y{}",
                scheme.as_str().unwrap_or("?"),
                spec.qs,
                spec.p,
                spec.ps,
                spec.coil_pitch_y
            ),
            payload: serde_json::json!({
                "scheme": scheme,
                "qs": spec.qs,
                "p": spec.p,
                "ps": spec.ps,
                "coil_pitch_y": spec.coil_pitch_y,
                "m": spec.m,
                "wrap_around": spec.wrap_around,
            }),
        })
    }
}
