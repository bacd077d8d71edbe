//! Property tests for resolution and the free-vector mapping.

use acmop_core::models::ConfigurationMode;
use acmop_geometry::inner_rotor::{self, names::*};
use acmop_geometry::search_space::{build_free_vector, vector_to_named};
use acmop_geometry::{DerivationEngine, ParameterRegistry};
use proptest::prelude::*;

fn reference_registry(mode: ConfigurationMode) -> ParameterRegistry {
    let mut registry = ParameterRegistry::construct(mode).unwrap();
    for (name, value) in test_fixtures::reference_values() {
        registry.set_value(&name, Some(value)).unwrap();
    }
    registry
}

fn mode_strategy() -> impl Strategy<Value = ConfigurationMode> {
    prop::sample::select(ConfigurationMode::ALL.to_vec())
}

proptest! {
    #[test]
    fn resolution_is_deterministic(
        split in 0.4f64..0.75,
        alpha in 8.0f64..20.0,
        sto in 0.5f64..1.5,
    ) {
        let spec = test_fixtures::spec_input();
        let mut registry = reference_registry(ConfigurationMode::FixedSleeveLength);
        registry.set_value(SPLIT_RATIO, Some(split)).unwrap();
        registry.set_value(DEG_ALPHA_ST, Some(alpha)).unwrap();
        registry.set_value(MM_D_STO, Some(sto)).unwrap();
        let mut other = registry.clone();

        let engine = DerivationEngine::new();
        engine.resolve(&mut registry, &spec).unwrap();
        engine.resolve(&mut other, &spec).unwrap();

        for (a, b) in registry.iter().zip(other.iter()) {
            prop_assert_eq!(a.value.map(f64::to_bits), b.value.map(f64::to_bits));
        }
    }

    #[test]
    fn resolution_ignores_table_order(
        mode in mode_strategy(),
        order in Just((0..13).collect::<Vec<usize>>()).prop_shuffle(),
    ) {
        let spec = test_fixtures::spec_input();
        let engine = DerivationEngine::new();

        let mut canonical = reference_registry(mode);
        engine.resolve(&mut canonical, &spec).unwrap();

        let table = inner_rotor::default_parameters();
        let shuffled: Vec<_> = order.iter().map(|&i| table[i].clone()).collect();
        let mut registry = ParameterRegistry::from_parameters(shuffled).unwrap();
        acmop_geometry::modes::apply_mode(&mut registry, mode).unwrap();
        for (name, value) in test_fixtures::reference_values() {
            registry.set_value(&name, Some(value)).unwrap();
        }
        engine.resolve(&mut registry, &spec).unwrap();

        for p in canonical.iter() {
            prop_assert_eq!(registry.value(&p.name), p.value, "{}", p.name);
        }
    }

    #[test]
    fn free_vector_round_trips(
        mode in mode_strategy(),
        seed in prop::collection::vec(0.1f64..100.0, 8),
    ) {
        let mut registry = ParameterRegistry::construct(mode).unwrap();
        let names: Vec<String> = registry.free().map(|p| p.name.clone()).collect();
        for (name, value) in names.iter().zip(&seed) {
            registry.set_value(name, Some(*value)).unwrap();
        }

        let vector = build_free_vector(&registry).unwrap();
        let named = vector_to_named(&registry, &vector).unwrap();
        prop_assert_eq!(named.len(), names.len());
        for (name, value) in names.iter().zip(&seed) {
            prop_assert_eq!(named.get(name), Some(*value));
        }
    }
}
