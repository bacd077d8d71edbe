//! Excitation and physical properties of a built variant.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use acmop_core::constants::MM_TO_M;
use acmop_core::errors::VariantError;
use acmop_core::models::SpecInput;
use acmop_core::traits::WindingLayout;
use serde::{Deserialize, Serialize};

/// Everything attached to a variant beyond its geometry.
///
/// The winding layout is not serialized; records reproduce it from the
/// spec input through the layout provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Excitation {
    #[serde(skip)]
    pub winding_layout: WindingLayout,
    pub stack_length_mm: f64,
    pub mechanical_air_gap_length_mm: f64,
    /// Current density (Arms/mm^2).
    pub js: f64,
    pub winding_fill: f64,
    /// Conductors per slot.
    pub zq: f64,
    pub drive_freq_hz: f64,
    pub drive_rs: f64,
    pub drive_poles: u32,
    pub rotor_volume_m3: f64,
    pub rotor_weight_n: f64,
    pub speed_rpm: f64,
    pub omega_rad_s: f64,
}

impl Excitation {
    /// Numeric properties keyed by field name.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("stack_length_mm", self.stack_length_mm),
            ("mechanical_air_gap_length_mm", self.mechanical_air_gap_length_mm),
            ("js", self.js),
            ("winding_fill", self.winding_fill),
            ("zq", self.zq),
            ("drive_freq_hz", self.drive_freq_hz),
            ("drive_rs", self.drive_rs),
            ("drive_poles", f64::from(self.drive_poles)),
            ("rotor_volume_m3", self.rotor_volume_m3),
            ("rotor_weight_n", self.rotor_weight_n),
            ("speed_rpm", self.speed_rpm),
            ("omega_rad_s", self.omega_rad_s),
        ])
    }

    /// Recompute the mechanical speed from the drive frequency.
    ///
    /// Only the synchronous speed is supported; passing a frequency to
    /// run at fails with [`VariantError::SpeedOverrideUnsupported`].
    pub fn update_speed(
        &mut self,
        spec: &SpecInput,
        synchronous_freq_hz: Option<f64>,
    ) -> Result<(), VariantError> {
        if let Some(freq) = synchronous_freq_hz {
            return Err(VariantError::SpeedOverrideUnsupported {
                rpm: synchronous_speed_rpm(freq, spec.number_of_rotor_pole_pairs),
            });
        }
        self.speed_rpm = synchronous_speed_rpm(self.drive_freq_hz, spec.number_of_rotor_pole_pairs);
        self.omega_rad_s = self.speed_rpm / 60.0 * 2.0 * PI;
        Ok(())
    }
}

pub fn synchronous_speed_rpm(drive_freq_hz: f64, rotor_pole_pairs: u32) -> f64 {
    drive_freq_hz * 60.0 / f64::from(rotor_pole_pairs)
}

/// Cylinder volume of the rotor (m^3) from radius and stack length in mm.
pub fn rotor_volume_m3(rotor_radius_mm: f64, stack_length_mm: f64) -> f64 {
    PI * (rotor_radius_mm * MM_TO_M).powi(2) * (stack_length_mm * MM_TO_M)
}

/// Rotor weight (N).
pub fn rotor_weight_n(gravity: f64, volume_m3: f64, density_kg_m3: f64) -> f64 {
    gravity * volume_m3 * density_kg_m3
}
