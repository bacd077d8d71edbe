//! A concrete, fully resolved design.

use std::collections::BTreeMap;
use std::sync::Arc;

use acmop_core::models::{ConfigurationMode, SpecInput};
use acmop_geometry::ParameterRegistry;
use chrono::{DateTime, Utc};

use crate::excitation::Excitation;

/// Owns its registry outright; only the spec input is shared.
#[derive(Debug, Clone)]
pub struct Variant {
    pub(crate) name: String,
    pub(crate) id: u64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) mode: ConfigurationMode,
    pub(crate) registry: ParameterRegistry,
    pub(crate) spec: Arc<SpecInput>,
    pub(crate) ex: Excitation,
}

impl Variant {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn mode(&self) -> ConfigurationMode {
        self.mode
    }

    pub fn registry(&self) -> &ParameterRegistry {
        &self.registry
    }

    pub fn spec(&self) -> &Arc<SpecInput> {
        &self.spec
    }

    pub fn excitation(&self) -> &Excitation {
        &self.ex
    }

    /// Value of every set parameter.
    pub fn current_values(&self) -> BTreeMap<String, f64> {
        self.registry
            .iter()
            .filter_map(|p| p.value.map(|v| (p.name.clone(), v)))
            .collect()
    }

    /// `ID{id}` during optimization, `{name}_ID{id}` otherwise.
    pub fn individual_name(&self, optimizing: bool) -> String {
        if optimizing {
            format!("ID{}", self.id)
        } else {
            format!("{}_ID{}", self.name, self.id)
        }
    }
}
