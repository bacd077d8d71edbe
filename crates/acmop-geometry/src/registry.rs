//! Ordered registry of named parameters.

use acmop_core::errors::GeometryError;
use acmop_core::models::{Bounds, ParameterKind, SnapshotEntry};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::FormulaCatalog;
use crate::parameter::{Parameter, Unresolved};

/// Ordered name → [`Parameter`] mapping.
///
/// Iteration follows insertion order. Cloning produces a fully independent
/// registry; nothing inside is shared or reference counted.
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
    params: Vec<Parameter>,
    index: FxHashMap<String, usize>,
}

impl ParameterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Names must be unique.
    pub fn insert(&mut self, param: Parameter) -> Result<(), GeometryError> {
        if self.index.contains_key(&param.name) {
            return Err(GeometryError::DuplicateParameter { name: param.name });
        }
        self.index.insert(param.name.clone(), self.params.len());
        self.params.push(param);
        Ok(())
    }

    /// Build a registry from parameters in order, then validate it.
    pub fn from_parameters(
        params: impl IntoIterator<Item = Parameter>,
    ) -> Result<Self, GeometryError> {
        let mut registry = Self::new();
        for param in params {
            registry.insert(param)?;
        }
        registry.validate()?;
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.index.get(name).map(|&i| &self.params[i])
    }

    /// Current value, `None` when the parameter is unknown or unset.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|p| p.value)
    }

    /// Value for use inside a calc function.
    ///
    /// An unknown or unset name yields [`Unresolved`], so formulas can
    /// propagate it with `?`.
    pub fn require(&self, name: &str) -> Result<f64, Unresolved> {
        self.value(name).ok_or_else(|| Unresolved::new(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }

    pub fn free(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(|p| p.is_free())
    }

    pub fn derived(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(|p| p.is_derived())
    }

    pub fn free_count(&self) -> usize {
        self.free().count()
    }

    pub fn derived_count(&self) -> usize {
        self.derived().count()
    }

    pub fn set_value(&mut self, name: &str, value: Option<f64>) -> Result<(), GeometryError> {
        self.entry_mut(name)?.value = value;
        Ok(())
    }

    /// Reclassify a parameter. Call [`validate`](Self::validate) once all
    /// reclassifications are applied.
    pub fn set_kind(&mut self, name: &str, kind: ParameterKind) -> Result<(), GeometryError> {
        self.entry_mut(name)?.kind = kind;
        Ok(())
    }

    pub fn set_bounds(&mut self, name: &str, bounds: Option<Bounds>) -> Result<(), GeometryError> {
        self.entry_mut(name)?.bounds = bounds;
        Ok(())
    }

    /// Every derived parameter must carry a calc function.
    pub fn validate(&self) -> Result<(), GeometryError> {
        match self.derived().find(|p| p.calc.is_none()) {
            Some(p) => Err(GeometryError::MissingCalc {
                name: p.name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Reset every derived value to unset.
    pub fn clear_derived(&mut self) {
        for p in self.params.iter_mut().filter(|p| p.is_derived()) {
            p.value = None;
        }
    }

    /// Name, kind, and value of every parameter, in order.
    pub fn snapshot(&self) -> Vec<SnapshotEntry> {
        self.params
            .iter()
            .map(|p| SnapshotEntry {
                name: p.name.clone(),
                kind: p.kind,
                value: p.value,
            })
            .collect()
    }

    /// Serializable form. Calc functions are behavior and are left out.
    pub fn to_snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            parameters: self
                .params
                .iter()
                .map(|p| ParameterRecord {
                    name: p.name.clone(),
                    label: p.label.clone(),
                    kind: p.kind,
                    value: p.value,
                    bounds: p.bounds,
                })
                .collect(),
        }
    }

    /// Rebuild a registry, re-attaching calc functions by parameter name.
    pub fn from_snapshot(
        snapshot: &RegistrySnapshot,
        catalog: &FormulaCatalog,
    ) -> Result<Self, GeometryError> {
        Self::from_parameters(snapshot.parameters.iter().map(|r| Parameter {
            name: r.name.clone(),
            label: r.label.clone(),
            kind: r.kind,
            value: r.value,
            bounds: r.bounds,
            calc: catalog.get(&r.name),
        }))
    }

    pub(crate) fn at(&self, idx: usize) -> &Parameter {
        &self.params[idx]
    }

    pub(crate) fn set_value_at(&mut self, idx: usize, value: Option<f64>) {
        self.params[idx].value = value;
    }

    pub(crate) fn derived_indices(&self) -> Vec<usize> {
        self.params
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_derived())
            .map(|(i, _)| i)
            .collect()
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut Parameter, GeometryError> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.params[i]),
            None => Err(GeometryError::UnknownParameter {
                name: name.to_string(),
            }),
        }
    }
}

/// Serializable registry state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub parameters: Vec<ParameterRecord>,
}

/// Serializable parameter state (everything except `calc`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub name: String,
    pub label: String,
    pub kind: ParameterKind,
    pub value: Option<f64>,
    pub bounds: Option<Bounds>,
}
