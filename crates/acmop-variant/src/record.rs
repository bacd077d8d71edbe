//! Serializable form of a variant.

use std::sync::Arc;

use acmop_core::errors::VariantError;
use acmop_core::models::{ConfigurationMode, SpecInput};
use acmop_core::traits::WindingLayoutProvider;
use acmop_geometry::{FormulaCatalog, ParameterRegistry, RegistrySnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::excitation::Excitation;
use crate::variant::Variant;

/// A variant as stored on disk. Formulas and the winding layout are not
/// stored; [`Variant::from_record`] restores both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRecord {
    pub name: String,
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub mode: ConfigurationMode,
    pub spec: SpecInput,
    pub registry: RegistrySnapshot,
    pub ex: Excitation,
}

impl Variant {
    pub fn to_record(&self) -> VariantRecord {
        VariantRecord {
            name: self.name.clone(),
            id: self.id,
            created_at: self.created_at,
            mode: self.mode,
            spec: (*self.spec).clone(),
            registry: self.registry.to_snapshot(),
            ex: self.ex.clone(),
        }
    }

    /// Rebuild a variant, re-attaching formulas by parameter name and
    /// recomputing the winding layout from the stored spec input.
    pub fn from_record(
        record: VariantRecord,
        catalog: &FormulaCatalog,
        winding: &dyn WindingLayoutProvider,
    ) -> Result<Self, VariantError> {
        let registry = ParameterRegistry::from_snapshot(&record.registry, catalog)?;
        let mut ex = record.ex;
        ex.winding_layout = winding.layout(&record.spec)?;
        Ok(Self {
            name: record.name,
            id: record.id,
            created_at: record.created_at,
            mode: record.mode,
            registry,
            spec: Arc::new(record.spec),
            ex,
        })
    }
}
