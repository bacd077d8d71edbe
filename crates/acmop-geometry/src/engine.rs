//! Derivation engine: resolves derived parameters by bounded fixpoint iteration.
//!
//! Dependencies between derived parameters change with the configuration
//! mode, so no graph is built. Each pass evaluates every pending derived
//! parameter in registry order; a formula that reads an unset input
//! reports [`Unresolved`](crate::Unresolved) and is retried next pass.
//! Values resolved earlier in a pass are visible later in the same pass.
//!
//! Termination: a pass that resolves nothing ends the loop, and the pass
//! count never exceeds the number of derived parameters.

use acmop_core::errors::GeometryError;
use acmop_core::models::SpecInput;
use tracing::{debug, instrument};

use crate::registry::ParameterRegistry;

/// Outcome of a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Passes over the pending set, including the first.
    pub passes: usize,
    /// Derived parameters resolved.
    pub resolved: usize,
}

/// Stateless resolver for derived parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivationEngine;

impl DerivationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Resolve every derived parameter of `registry` in place.
    ///
    /// Stale derived values are cleared first. On error the registry holds
    /// whatever was resolved before the failure and must be discarded.
    #[instrument(skip_all, fields(derived = registry.derived_count()))]
    pub fn resolve(
        &self,
        registry: &mut ParameterRegistry,
        spec: &SpecInput,
    ) -> Result<ResolutionReport, GeometryError> {
        registry.clear_derived();

        let mut pending = registry.derived_indices();
        let total = pending.len();
        let max_passes = total.max(1);
        let mut passes = 0;

        while !pending.is_empty() && passes < max_passes {
            passes += 1;
            let before = pending.len();
            let mut deferred = Vec::with_capacity(before);

            for idx in pending {
                let param = registry.at(idx);
                let calc = param.calc.ok_or_else(|| GeometryError::MissingCalc {
                    name: param.name.clone(),
                })?;

                match calc(registry, spec) {
                    Ok(value) => {
                        registry.set_value_at(idx, Some(value));
                        check_value(registry, idx, value)?;
                    }
                    Err(unresolved) => {
                        debug!(
                            parameter = %registry.at(idx).name,
                            missing = %unresolved.name,
                            pass = passes,
                            "derivation deferred"
                        );
                        deferred.push(idx);
                    }
                }
            }

            pending = deferred;
            debug!(pass = passes, remaining = pending.len(), "derivation pass complete");

            if pending.len() == before {
                break;
            }
        }

        if !pending.is_empty() {
            return Err(GeometryError::DependencyUnresolved {
                unresolved: pending
                    .iter()
                    .map(|&i| registry.at(i).name.clone())
                    .collect(),
            });
        }

        Ok(ResolutionReport {
            passes,
            resolved: total,
        })
    }
}

/// Derived values must be finite and strictly positive. The offending
/// value is already stored so the snapshot shows it.
fn check_value(registry: &ParameterRegistry, idx: usize, value: f64) -> Result<(), GeometryError> {
    let name = || registry.at(idx).name.clone();
    if value.is_nan() || value <= 0.0 {
        return Err(GeometryError::NonPositiveDerivedValue {
            name: name(),
            value,
            snapshot: registry.snapshot(),
        });
    }
    if !value.is_finite() {
        return Err(GeometryError::NonFiniteDerivedValue {
            name: name(),
            value,
            snapshot: registry.snapshot(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::{Parameter, Unresolved};

    type Formula = Result<f64, Unresolved>;

    fn spec() -> SpecInput {
        test_fixtures::spec_input()
    }

    fn b_from_a(r: &ParameterRegistry, _: &SpecInput) -> Formula {
        Ok(r.require("a")? + 1.0)
    }

    fn c_from_b(r: &ParameterRegistry, _: &SpecInput) -> Formula {
        Ok(r.require("b")? * 2.0)
    }

    fn d_from_c(r: &ParameterRegistry, _: &SpecInput) -> Formula {
        Ok(r.require("c")? + 3.0)
    }

    #[test]
    fn test_reverse_chain_needs_one_pass_per_link() {
        // d <- c <- b <- a, listed in the worst order.
        let mut r = ParameterRegistry::from_parameters([
            Parameter::derived("d", "d", d_from_c),
            Parameter::derived("c", "c", c_from_b),
            Parameter::derived("b", "b", b_from_a),
            Parameter::fixed("a", "a").with_value(1.0),
        ])
        .unwrap();
        let report = DerivationEngine::new().resolve(&mut r, &spec()).unwrap();
        assert_eq!(report, ResolutionReport { passes: 3, resolved: 3 });
        assert_eq!(r.value("d"), Some(7.0));
    }

    #[test]
    fn test_forward_chain_resolves_in_one_pass() {
        let mut r = ParameterRegistry::from_parameters([
            Parameter::fixed("a", "a").with_value(1.0),
            Parameter::derived("b", "b", b_from_a),
            Parameter::derived("c", "c", c_from_b),
        ])
        .unwrap();
        let report = DerivationEngine::new().resolve(&mut r, &spec()).unwrap();
        assert_eq!(report.passes, 1);
    }

    #[test]
    fn test_no_derived_parameters_is_trivially_resolved() {
        let mut r =
            ParameterRegistry::from_parameters([Parameter::fixed("a", "a").with_value(1.0)]).unwrap();
        let report = DerivationEngine::new().resolve(&mut r, &spec()).unwrap();
        assert_eq!(report, ResolutionReport { passes: 0, resolved: 0 });
    }

    #[test]
    fn test_stale_values_are_cleared() {
        let mut r = ParameterRegistry::from_parameters([
            Parameter::fixed("a", "a").with_value(1.0),
            Parameter::derived("b", "b", b_from_a),
        ])
        .unwrap();
        r.set_value("b", Some(99.0)).unwrap();
        DerivationEngine::new().resolve(&mut r, &spec()).unwrap();
        assert_eq!(r.value("b"), Some(2.0));
    }
}
