//! Tests for the acmop error handling system.

use acmop_core::errors::error_code::{self, AcmopErrorCode};
use acmop_core::errors::*;
use acmop_core::models::{ParameterKind, SnapshotEntry};

fn snapshot() -> Vec<SnapshotEntry> {
    vec![
        SnapshotEntry {
            name: "mm_r_ro".into(),
            kind: ParameterKind::Fixed,
            value: Some(20.0),
        },
        SnapshotEntry {
            name: "mm_r_si".into(),
            kind: ParameterKind::Derived,
            value: Some(-1.0),
        },
    ]
}

#[test]
fn test_geometry_error_families_are_disjoint() {
    let cases = [
        GeometryError::UnknownMode { mode: "x".into() },
        GeometryError::MissingCalc { name: "a".into() },
        GeometryError::MissingBounds { name: "a".into() },
        GeometryError::DependencyUnresolved {
            unresolved: vec!["a".into()],
        },
        GeometryError::NonPositiveDerivedValue {
            name: "mm_r_si".into(),
            value: -1.0,
            snapshot: snapshot(),
        },
        GeometryError::VectorLengthMismatch {
            expected: 4,
            actual: 3,
        },
    ];
    for err in &cases {
        let families = [
            err.is_configuration_error(),
            err.is_infeasible(),
            err.is_contract_violation(),
        ];
        assert_eq!(
            families.iter().filter(|f| **f).count(),
            1,
            "{err:?} should belong to exactly one family"
        );
    }
}

#[test]
fn test_error_codes() {
    assert_eq!(
        GeometryError::MissingCalc { name: "a".into() }.error_code(),
        error_code::CONFIGURATION_ERROR
    );
    assert_eq!(
        GeometryError::DependencyUnresolved { unresolved: vec![] }.error_code(),
        error_code::DEPENDENCY_UNRESOLVED
    );
    assert_eq!(
        GeometryError::VectorLengthMismatch { expected: 1, actual: 2 }.error_code(),
        error_code::VECTOR_LENGTH_MISMATCH
    );
    let variant = VariantError::SpeedOverrideUnsupported { rpm: 3000.0 };
    assert_eq!(variant.error_code(), error_code::NOT_SUPPORTED);
}

#[test]
fn test_unresolved_message_lists_names() {
    let err = GeometryError::DependencyUnresolved {
        unresolved: vec!["mm_d_st".into(), "mm_d_sy".into()],
    };
    assert!(err.to_string().contains("mm_d_st, mm_d_sy"));
}

#[test]
fn test_non_positive_message_carries_snapshot() {
    let err = GeometryError::NonPositiveDerivedValue {
        name: "mm_r_si".into(),
        value: -1.0,
        snapshot: snapshot(),
    };
    let msg = err.to_string();
    assert!(msg.contains("mm_r_si"));
    assert!(msg.contains("mm_r_ro [fixed] = 20"));
}

#[test]
fn test_display_code_prefixes_code() {
    let err = GeometryError::UnknownMode { mode: "Outrunner".into() };
    assert_eq!(
        err.display_code(),
        "[CONFIGURATION_ERROR] unrecognized configuration mode: Outrunner"
    );
}

#[test]
fn test_from_conversions() {
    let geometry = GeometryError::DependencyUnresolved {
        unresolved: vec!["a".into()],
    };
    let variant: VariantError = geometry.clone().into();
    assert!(variant.is_infeasible());
    assert_eq!(variant.error_code(), error_code::DEPENDENCY_UNRESOLVED);

    let top: AcmopError = variant.into();
    assert!(matches!(top, AcmopError::Variant(VariantError::Geometry(_))));

    let top: AcmopError = geometry.into();
    assert!(matches!(top, AcmopError::Geometry(_)));

    let top: AcmopError = ConfigError::FileNotFound { path: "/x".into() }.into();
    assert_eq!(top.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn test_collaborator_failure_is_not_infeasible() {
    let err = VariantError::Collaborator {
        collaborator: "stack length",
        message: "no data".into(),
    };
    assert!(!err.is_infeasible());
    assert!(err.to_string().contains("stack length failed"));
}
