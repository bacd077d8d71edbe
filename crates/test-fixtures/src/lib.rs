//! Test fixture loader for acmop spec inputs, reference designs, and bounds.
//!
//! Provides typed deserialization of the fixture JSON files under the
//! workspace `test-fixtures/` directory, plus collaborator stubs.

use std::collections::BTreeMap;
use std::path::PathBuf;

use acmop_core::errors::VariantError;
use acmop_core::models::{Bounds, SpecInput};
use acmop_core::traits::StackLengthEstimator;
use serde::de::DeserializeOwned;

/// Root directory of the test-fixtures data folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to the data folder.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("spec_inputs").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// The p2ps1 Q24 surface-PM spec input.
pub fn spec_input() -> SpecInput {
    load_fixture("spec_inputs/spmsm_p2ps1_q24.json")
}

/// Initial values for every parameter of the inner-rotor table that is
/// not derived in the default configuration:
/// `mm_r_ro = 20`, `mm_d_sleeve = 1`, `mm_d_mech_air_gap = 0.5`,
/// `split_ratio = 0.6`, which give `mm_r_si = 21.5` and `mm_r_so = 35.833…`.
pub fn reference_values() -> BTreeMap<String, f64> {
    load_fixture("designs/inner_rotor_reference.json")
}

/// Bounds covering every parameter that any mode can make free.
pub fn reference_bounds() -> BTreeMap<String, Bounds> {
    load_fixture("designs/inner_rotor_bounds.json")
}

/// Stack-length estimator that always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStackLength;

impl StackLengthEstimator for FailingStackLength {
    fn stack_length_mm(&self, _spec: &SpecInput, _rotor_radius_m: f64) -> Result<f64, VariantError> {
        Err(VariantError::Collaborator {
            collaborator: "stack length",
            message: "no estimate available".to_string(),
        })
    }
}

/// Stack length proportional to the rotor radius (`factor · r_ro`, in mm).
#[derive(Debug, Clone, Copy)]
pub struct ProportionalStackLength(pub f64);

impl StackLengthEstimator for ProportionalStackLength {
    fn stack_length_mm(&self, _spec: &SpecInput, rotor_radius_m: f64) -> Result<f64, VariantError> {
        Ok(self.0 * rotor_radius_m * 1e3)
    }
}
