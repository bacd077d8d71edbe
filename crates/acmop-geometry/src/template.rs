//! Per-topology template registry shared by every variant of a run.

use std::collections::BTreeMap;
use std::sync::Arc;

use acmop_core::config::AcmopConfig;
use acmop_core::errors::{AcmopError, ConfigError, GeometryError};
use acmop_core::models::{Bounds, ConfigurationMode, SpecInput};
use tracing::debug;

use crate::engine::{DerivationEngine, ResolutionReport};
use crate::registry::ParameterRegistry;
use crate::search_space::{self, SearchSpace};

/// Configuration-mode-specific base registry plus the spec it was built for.
///
/// Mutated only during setup (initial values, bounds). Variant builds take
/// it by shared reference and work on clones.
#[derive(Debug, Clone)]
pub struct MachineTemplate {
    mode: ConfigurationMode,
    spec: Arc<SpecInput>,
    registry: ParameterRegistry,
}

impl MachineTemplate {
    /// Inner-rotor template for `mode`.
    pub fn new(mode: ConfigurationMode, spec: SpecInput) -> Result<Self, GeometryError> {
        Ok(Self {
            mode,
            spec: Arc::new(spec),
            registry: ParameterRegistry::construct(mode)?,
        })
    }

    /// Template over a caller-built registry.
    pub fn from_registry(
        mode: ConfigurationMode,
        spec: SpecInput,
        registry: ParameterRegistry,
    ) -> Result<Self, GeometryError> {
        registry.validate()?;
        Ok(Self {
            mode,
            spec: Arc::new(spec),
            registry,
        })
    }

    /// Template from loaded config: mode from `geometry.mode`, bounds from
    /// `search.bounds`. Bounds are applied only when the table is non-empty.
    pub fn from_config(
        config: &AcmopConfig,
        spec: SpecInput,
        initial_values: &BTreeMap<String, f64>,
    ) -> Result<Self, AcmopError> {
        let mode = config.mode()?.ok_or_else(|| ConfigError::ValidationFailed {
            field: "geometry.mode".to_string(),
            message: "a configuration mode is required".to_string(),
        })?;
        let mut template = Self::new(mode, spec)?;
        template.set_values(initial_values)?;
        if !config.search.bounds.is_empty() {
            template.define_search_space(&config.search.bounds)?;
        }
        Ok(template)
    }

    pub fn mode(&self) -> ConfigurationMode {
        self.mode
    }

    pub fn spec(&self) -> &Arc<SpecInput> {
        &self.spec
    }

    pub fn registry(&self) -> &ParameterRegistry {
        &self.registry
    }

    /// Set initial values by name (any kind).
    pub fn set_values(&mut self, values: &BTreeMap<String, f64>) -> Result<(), GeometryError> {
        for (name, &value) in values {
            self.registry.set_value(name, Some(value))?;
        }
        Ok(())
    }

    /// Resolve the template's own derived values (reference design).
    pub fn resolve(&mut self, engine: &DerivationEngine) -> Result<ResolutionReport, GeometryError> {
        engine.resolve(&mut self.registry, &self.spec)
    }

    /// Assign bounds to every free parameter and return them in order.
    pub fn define_search_space(
        &mut self,
        bounds_by_name: &BTreeMap<String, Bounds>,
    ) -> Result<Vec<Bounds>, GeometryError> {
        let bounds = search_space::define_bounds(&mut self.registry, bounds_by_name)?;
        debug!(mode = %self.mode, search_dimension = bounds.len(), "search space defined");
        Ok(bounds)
    }

    pub fn search_space(&self) -> Result<SearchSpace, GeometryError> {
        SearchSpace::from_registry(&self.registry)
    }

    /// Current free vector (`x_denorm`) of the template.
    pub fn build_x_denorm(&self) -> Result<Vec<f64>, GeometryError> {
        search_space::build_free_vector(&self.registry)
    }
}
