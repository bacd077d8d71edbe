//! Scalar design inputs consumed by formulas and downstream derivations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PHASE_COUNT;
use crate::errors::ConfigError;

/// Winding arrangement for combined torque/suspension machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindingScheme {
    /// Dual-purpose, no-voltage winding.
    Dpnv,
    /// Separate torque and suspension windings.
    Separate,
}

/// Read-only design specification for one machine topology.
///
/// Formulas only ever see `&SpecInput`. Inputs without a typed field go in
/// `extra` and are reachable through [`SpecInput::get`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecInput {
    /// Torque winding pole pairs.
    pub p: u32,
    /// Suspension winding pole pairs.
    pub ps: u32,
    /// Stator slot count.
    pub qs: u32,
    /// Coil pitch in slots.
    pub coil_pitch_y: u32,
    /// Phase count.
    #[serde(default = "default_phase_count")]
    pub m: u32,
    pub winding_scheme: WindingScheme,
    #[serde(default)]
    pub wrap_around: Option<bool>,
    /// Current density (Arms/mm^2).
    pub js: f64,
    pub winding_fill: f64,
    /// Excitation frequency used in simulation (Hz).
    pub excitation_freq_hz: f64,
    pub number_of_rotor_pole_pairs: u32,
    pub minimum_mechanical_air_gap_length_mm: f64,
    #[serde(default)]
    pub extra: BTreeMap<String, f64>,
}

fn default_phase_count() -> u32 {
    DEFAULT_PHASE_COUNT
}

impl SpecInput {
    /// Look up a scalar input by name. Typed fields shadow `extra`.
    pub fn get(&self, name: &str) -> Option<f64> {
        let v = match name {
            "p" => f64::from(self.p),
            "ps" => f64::from(self.ps),
            "qs" => f64::from(self.qs),
            "coil_pitch_y" => f64::from(self.coil_pitch_y),
            "m" => f64::from(self.m),
            "js" => self.js,
            "winding_fill" => self.winding_fill,
            "excitation_freq_hz" => self.excitation_freq_hz,
            "number_of_rotor_pole_pairs" => f64::from(self.number_of_rotor_pole_pairs),
            "minimum_mechanical_air_gap_length_mm" => self.minimum_mechanical_air_gap_length_mm,
            _ => return self.extra.get(name).copied(),
        };
        Some(v)
    }

    /// Identifier prefix shared by every variant of this design,
    /// e.g. `p2ps1-Q24y5`.
    pub fn design_prefix(&self) -> String {
        format!("p{}ps{}-Q{}y{}", self.p, self.ps, self.qs, self.coil_pitch_y)
    }

    /// Load a spec input from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a spec input from a TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Reject inputs that would make downstream formulas divide by zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive_counts = [
            ("p", self.p),
            ("qs", self.qs),
            ("m", self.m),
            ("number_of_rotor_pole_pairs", self.number_of_rotor_pole_pairs),
        ];
        for (field, value) in positive_counts {
            if value == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if !(self.excitation_freq_hz.is_finite() && self.excitation_freq_hz > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "excitation_freq_hz".to_string(),
                message: "must be a positive frequency".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.winding_fill) {
            return Err(ConfigError::ValidationFailed {
                field: "winding_fill".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        Ok(())
    }
}
