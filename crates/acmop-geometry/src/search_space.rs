//! Free-parameter vector interface for an external optimizer.
//!
//! The optimizer sees a flat vector ordered like the free parameters of
//! the registry. Every function here relies on that ordering.

use std::collections::BTreeMap;

use acmop_core::errors::GeometryError;
use acmop_core::models::Bounds;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::registry::ParameterRegistry;

/// Free-parameter values keyed by name, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedVector {
    entries: Vec<(String, f64)>,
}

impl NamedVector {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values in order, i.e. the optimizer's vector.
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, v)| *v).collect()
    }
}

/// Current value of every free parameter, in registry order.
pub fn build_free_vector(registry: &ParameterRegistry) -> Result<Vec<f64>, GeometryError> {
    registry
        .free()
        .map(|p| {
            p.value.ok_or_else(|| GeometryError::UnsetFreeParameter {
                name: p.name.clone(),
            })
        })
        .collect()
}

/// Map a candidate vector positionally onto the free parameter names.
pub fn vector_to_named(
    registry: &ParameterRegistry,
    vector: &[f64],
) -> Result<NamedVector, GeometryError> {
    let expected = registry.free_count();
    if vector.len() != expected {
        return Err(GeometryError::VectorLengthMismatch {
            expected,
            actual: vector.len(),
        });
    }
    Ok(NamedVector {
        entries: registry
            .free()
            .zip(vector)
            .map(|(p, &v)| (p.name.clone(), v))
            .collect(),
    })
}

/// Write named values into a registry.
pub fn apply_named(
    registry: &mut ParameterRegistry,
    named: &NamedVector,
) -> Result<(), GeometryError> {
    for (name, value) in named.iter() {
        registry.set_value(name, Some(value))?;
    }
    Ok(())
}

/// Assign bounds to every free parameter from `bounds_by_name` and
/// return them in registry order.
pub fn define_bounds(
    registry: &mut ParameterRegistry,
    bounds_by_name: &BTreeMap<String, Bounds>,
) -> Result<Vec<Bounds>, GeometryError> {
    let free_names: Vec<String> = registry.free().map(|p| p.name.clone()).collect();
    let mut ordered = Vec::with_capacity(free_names.len());

    for name in free_names {
        let bounds = *bounds_by_name
            .get(&name)
            .ok_or_else(|| GeometryError::MissingBounds { name: name.clone() })?;
        if !bounds.is_valid() {
            return Err(GeometryError::InvalidBounds {
                name,
                lower: bounds.lower,
                upper: bounds.upper,
            });
        }
        registry.set_bounds(&name, Some(bounds))?;
        ordered.push(bounds);
    }

    info!(
        search_dimension = ordered.len(),
        bounds = ?ordered.iter().map(|b| [b.lower, b.upper]).collect::<Vec<_>>(),
        "template bounds defined"
    );
    Ok(ordered)
}

/// Ordered names and bounds of the free parameters, fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSpace {
    names: Vec<String>,
    bounds: Vec<Bounds>,
}

impl SearchSpace {
    /// Capture the search space. Every free parameter needs bounds.
    pub fn from_registry(registry: &ParameterRegistry) -> Result<Self, GeometryError> {
        let mut names = Vec::new();
        let mut bounds = Vec::new();
        for p in registry.free() {
            let b = p.bounds.ok_or_else(|| GeometryError::MissingBounds {
                name: p.name.clone(),
            })?;
            names.push(p.name.clone());
            bounds.push(b);
        }
        Ok(Self { names, bounds })
    }

    pub fn dimension(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn bounds(&self) -> &[Bounds] {
        &self.bounds
    }

    /// True when every coordinate lies inside its bounds.
    pub fn contains(&self, vector: &[f64]) -> bool {
        vector.len() == self.dimension()
            && vector.iter().zip(&self.bounds).all(|(&v, b)| b.contains(v))
    }

    /// Physical values to the unit cube. A zero-width interval maps to 0.
    pub fn normalize(&self, x_denorm: &[f64]) -> Result<Vec<f64>, GeometryError> {
        self.check_len(x_denorm)?;
        Ok(x_denorm
            .iter()
            .zip(&self.bounds)
            .map(|(&v, b)| {
                let width = b.width();
                if width == 0.0 {
                    0.0
                } else {
                    (v - b.lower) / width
                }
            })
            .collect())
    }

    /// Unit-cube coordinates to physical values.
    pub fn denormalize(&self, x_norm: &[f64]) -> Result<Vec<f64>, GeometryError> {
        self.check_len(x_norm)?;
        Ok(x_norm
            .iter()
            .zip(&self.bounds)
            .map(|(&u, b)| b.lower + u * b.width())
            .collect())
    }

    fn check_len(&self, vector: &[f64]) -> Result<(), GeometryError> {
        if vector.len() != self.dimension() {
            return Err(GeometryError::VectorLengthMismatch {
                expected: self.dimension(),
                actual: vector.len(),
            });
        }
        Ok(())
    }
}
