//! Name → calc function lookup used to re-attach formulas after deserialization.

use rustc_hash::FxHashMap;

use crate::parameter::CalcFn;

/// Formulas keyed by the parameter they compute.
#[derive(Debug, Clone, Default)]
pub struct FormulaCatalog {
    formulas: FxHashMap<String, CalcFn>,
}

impl FormulaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the formula for `name`.
    pub fn register(&mut self, name: impl Into<String>, calc: CalcFn) -> &mut Self {
        self.formulas.insert(name.into(), calc);
        self
    }

    pub fn get(&self, name: &str) -> Option<CalcFn> {
        self.formulas.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}
