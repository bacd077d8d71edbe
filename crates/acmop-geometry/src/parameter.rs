//! A single named geometric attribute.

use std::fmt;

use acmop_core::models::{Bounds, ParameterKind, SpecInput};

use crate::registry::ParameterRegistry;

/// Signal from a calc function that one of its inputs is not set yet.
///
/// The engine treats it as "try again next pass", never as a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    pub name: String,
}

impl Unresolved {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is unset", self.name)
    }
}

/// Pure formula computing one parameter from the registry and spec input.
///
/// A plain `fn` pointer: `Copy`, `Send`, and `Sync`, so registries clone
/// cheaply and can be resolved on any thread.
pub type CalcFn = fn(&ParameterRegistry, &SpecInput) -> Result<f64, Unresolved>;

/// One named attribute of the cross-section.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub label: String,
    pub kind: ParameterKind,
    /// `None` means unset, which is distinct from zero.
    pub value: Option<f64>,
    pub bounds: Option<Bounds>,
    /// Only evaluated while the parameter is `Derived`.
    pub calc: Option<CalcFn>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            value: None,
            bounds: None,
            calc: None,
        }
    }

    pub fn fixed(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, ParameterKind::Fixed)
    }

    pub fn free(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, ParameterKind::Free)
    }

    pub fn derived(name: impl Into<String>, label: impl Into<String>, calc: CalcFn) -> Self {
        Self::new(name, label, ParameterKind::Derived).with_calc(calc)
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_calc(mut self, calc: CalcFn) -> Self {
        self.calc = Some(calc);
        self
    }

    pub fn is_free(&self) -> bool {
        self.kind == ParameterKind::Free
    }

    pub fn is_derived(&self) -> bool {
        self.kind == ParameterKind::Derived
    }
}
