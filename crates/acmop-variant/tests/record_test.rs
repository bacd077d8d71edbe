//! Variant records survive a JSON round trip.

use std::sync::Arc;

use acmop_core::models::ConfigurationMode;
use acmop_core::traits::{DescriptorWindingProvider, FixedSlotConductors, FixedStackLength};
use acmop_geometry::{inner_rotor, DerivationEngine, MachineTemplate};
use acmop_variant::{Variant, VariantFactory, VariantIdentity, VariantRecord};

fn built_variant() -> Variant {
    let mut template = MachineTemplate::new(
        ConfigurationMode::VariableSleeveLength,
        test_fixtures::spec_input(),
    )
    .unwrap();
    template.set_values(&test_fixtures::reference_values()).unwrap();
    template.resolve(&DerivationEngine::new()).unwrap();

    VariantFactory::new(
        Arc::new(FixedStackLength(100.0)),
        Arc::new(FixedSlotConductors(12.0)),
    )
    .build(
        &template,
        // mm_d_sleeve, split_ratio, deg_alpha_st, mm_w_st, mm_d_st, mm_d_sto
        Some(&[2.0, 0.5, 10.0, 5.0, 9.0, 1.0][..]),
        &VariantIdentity::numbered(4),
    )
    .unwrap()
}

#[test]
fn test_record_round_trip_restores_variant() {
    let variant = built_variant();
    let json = serde_json::to_string_pretty(&variant.to_record()).unwrap();
    let record: VariantRecord = serde_json::from_str(&json).unwrap();

    let restored =
        Variant::from_record(record, &inner_rotor::catalog(), &DescriptorWindingProvider).unwrap();

    assert_eq!(restored.name(), variant.name());
    assert_eq!(restored.id(), 4);
    assert_eq!(restored.created_at(), variant.created_at());
    assert_eq!(restored.mode(), ConfigurationMode::VariableSleeveLength);
    assert_eq!(restored.current_values(), variant.current_values());
    assert_eq!(restored.excitation(), variant.excitation());
    assert_eq!(restored.spec().as_ref(), variant.spec().as_ref());
    assert_eq!(restored.registry().value("mm_r_si"), Some(22.5));
}

#[test]
fn test_restored_registry_resolves_again() {
    let variant = built_variant();
    let restored = Variant::from_record(
        variant.to_record(),
        &inner_rotor::catalog(),
        &DescriptorWindingProvider,
    )
    .unwrap();

    let mut registry = restored.registry().clone();
    DerivationEngine::new()
        .resolve(&mut registry, restored.spec())
        .unwrap();
    assert_eq!(registry.to_snapshot(), variant.registry().to_snapshot());
}

#[test]
fn test_record_omits_winding_layout() {
    let json = serde_json::to_value(built_variant().to_record()).unwrap();
    assert!(json["ex"].get("winding_layout").is_none());
    assert_eq!(json["ex"]["drive_poles"], 4);
    assert_eq!(json["mode"], "VariableSleeveLength");
}
