//! Derivation engine scenarios on the inner-rotor table.

use acmop_core::errors::GeometryError;
use acmop_core::models::{ConfigurationMode, ParameterKind, SpecInput};
use acmop_geometry::inner_rotor::names::*;
use acmop_geometry::{DerivationEngine, Parameter, ParameterRegistry, Unresolved};

fn reference_registry(mode: ConfigurationMode) -> ParameterRegistry {
    let mut registry = ParameterRegistry::construct(mode).unwrap();
    for (name, value) in test_fixtures::reference_values() {
        registry.set_value(&name, Some(value)).unwrap();
    }
    registry
}

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("value should be set");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_stator_radii_from_rotor_side() {
    let spec = test_fixtures::spec_input();
    let mut registry = reference_registry(ConfigurationMode::FixedSleeveLength);
    assert_eq!(registry.get(MM_D_SLEEVE).unwrap().kind, ParameterKind::Fixed);
    assert_eq!(registry.get(SPLIT_RATIO).unwrap().kind, ParameterKind::Free);

    let report = DerivationEngine::new().resolve(&mut registry, &spec).unwrap();
    assert_eq!(report.resolved, 4);

    assert_close(registry.value(MM_R_SI), 21.5);
    assert_close(registry.value(MM_R_SO), 21.5 / 0.6);
    assert_close(registry.value(MM_R_SO), 35.833_333_333_333_336);
    assert_close(registry.value(DEG_ALPHA_STO), 6.0);
    assert_close(registry.value(MM_D_STT), 1.2);
}

#[test]
fn test_every_derived_value_positive_after_resolution() {
    let spec = test_fixtures::spec_input();
    for mode in ConfigurationMode::ALL {
        let mut registry = reference_registry(mode);
        DerivationEngine::new().resolve(&mut registry, &spec).unwrap();
        for p in registry.derived() {
            assert!(p.value.unwrap() > 0.0, "{mode}: {}", p.name);
        }
    }
}

#[test]
fn test_fspm_tooth_depth_resolves_on_second_pass() {
    let spec = test_fixtures::spec_input();
    let mut registry = reference_registry(ConfigurationMode::VariableToothTipDepthFspm);
    let report = DerivationEngine::new().resolve(&mut registry, &spec).unwrap();
    // mm_d_st precedes mm_r_so in the table, so its first attempt defers.
    assert_eq!(report.passes, 2);
    assert_close(registry.value(MM_D_ST), 21.5 / 0.6 - 21.5 - 3.0 - 1.2);
}

#[test]
fn test_zero_derived_value_is_rejected() {
    let spec = test_fixtures::spec_input();
    let mut registry = reference_registry(ConfigurationMode::FixedSleeveLength);
    registry.set_value(MM_R_RO, Some(1.0)).unwrap();
    registry.set_value(MM_D_SLEEVE, Some(-1.5)).unwrap();

    let err = DerivationEngine::new().resolve(&mut registry, &spec).unwrap_err();
    match err {
        GeometryError::NonPositiveDerivedValue { name, value, snapshot } => {
            assert_eq!(name, MM_R_SI);
            assert_eq!(value, 0.0);
            assert_eq!(snapshot.len(), 13);
            let row = snapshot.iter().find(|e| e.name == MM_R_SI).unwrap();
            assert_eq!(row.value, Some(0.0));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_negative_derived_value_is_rejected_not_clamped() {
    let spec = test_fixtures::spec_input();
    let mut registry = reference_registry(ConfigurationMode::FixedSleeveLength);
    registry.set_value(MM_R_RO, Some(1.0)).unwrap();
    registry.set_value(MM_D_SLEEVE, Some(-2.0)).unwrap();

    let err = DerivationEngine::new().resolve(&mut registry, &spec).unwrap_err();
    assert!(err.is_infeasible());
    assert!(matches!(
        err,
        GeometryError::NonPositiveDerivedValue { ref name, value, .. } if name == MM_R_SI && value < 0.0
    ));
}

#[test]
fn test_zero_split_ratio_is_non_finite() {
    let spec = test_fixtures::spec_input();
    let mut registry = reference_registry(ConfigurationMode::FixedSleeveLength);
    registry.set_value(SPLIT_RATIO, Some(0.0)).unwrap();

    let err = DerivationEngine::new().resolve(&mut registry, &spec).unwrap_err();
    assert!(matches!(
        err,
        GeometryError::NonFiniteDerivedValue { ref name, .. } if name == MM_R_SO
    ));
}

#[test]
fn test_mutual_dependency_is_unresolved() {
    let spec = test_fixtures::spec_input();
    let mut registry = reference_registry(ConfigurationMode::VariableToothTipDepthFspm);
    // Tooth depth and yoke depth each need the other.
    registry.set_kind(MM_D_SY, ParameterKind::Derived).unwrap();
    registry.validate().unwrap();

    let err = DerivationEngine::new().resolve(&mut registry, &spec).unwrap_err();
    match err {
        GeometryError::DependencyUnresolved { unresolved } => {
            assert_eq!(unresolved, [MM_D_ST, MM_D_SY]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // Independent derived values still resolved.
    assert!(registry.value(MM_R_SO).is_some());
}

#[test]
fn test_missing_fixed_input_is_unresolved() {
    let spec = test_fixtures::spec_input();
    let mut registry = reference_registry(ConfigurationMode::FixedSleeveLength);
    registry.set_value(MM_R_RO, None).unwrap();

    let err = DerivationEngine::new().resolve(&mut registry, &spec).unwrap_err();
    assert!(matches!(
        err,
        GeometryError::DependencyUnresolved { ref unresolved } if unresolved == &[MM_R_SI, MM_R_SO]
    ));
}

fn self_referencing(r: &ParameterRegistry, _: &SpecInput) -> Result<f64, Unresolved> {
    Ok(r.require("x")? + 1.0)
}

#[test]
fn test_self_reference_terminates() {
    let spec = test_fixtures::spec_input();
    let mut registry =
        ParameterRegistry::from_parameters([Parameter::derived("x", "x", self_referencing)]).unwrap();
    let err = DerivationEngine::new().resolve(&mut registry, &spec).unwrap_err();
    assert!(matches!(err, GeometryError::DependencyUnresolved { .. }));
}

fn from_spec(_: &ParameterRegistry, si: &SpecInput) -> Result<f64, Unresolved> {
    si.get("voltage_rms").ok_or_else(|| Unresolved::new("voltage_rms"))
}

#[test]
fn test_formulas_read_spec_input() {
    let spec = test_fixtures::spec_input();
    let mut registry =
        ParameterRegistry::from_parameters([Parameter::derived("v", "v", from_spec)]).unwrap();
    DerivationEngine::new().resolve(&mut registry, &spec).unwrap();
    assert_eq!(registry.value("v"), Some(230.0));
}

#[test]
fn test_repeated_resolution_is_bit_identical() {
    let spec = test_fixtures::spec_input();
    let mut first = reference_registry(ConfigurationMode::VariableSleeveLength);
    let mut second = first.clone();
    let engine = DerivationEngine::new();
    engine.resolve(&mut first, &spec).unwrap();
    engine.resolve(&mut second, &spec).unwrap();
    engine.resolve(&mut second, &spec).unwrap();

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.value.map(f64::to_bits), b.value.map(f64::to_bits), "{}", a.name);
    }
}
