//! Builds variants from a template and an optimizer candidate.
//!
//! Every build works on a private clone of the template registry, so a
//! shared `&MachineTemplate` can feed any number of concurrent builds.

use std::sync::Arc;
use std::time::Instant;

use acmop_core::config::VariantConfig;
use acmop_core::constants::{DEFAULT_DRIVE_RESISTANCE_OHM, MM_TO_M};
use acmop_core::errors::VariantError;
use acmop_core::models::SpecInput;
use acmop_core::traits::{
    DescriptorWindingProvider, MaterialDataProvider, SlotConductorEstimator, SlotConductorQuery,
    StackLengthEstimator, StaticMaterialProvider, WindingLayoutProvider,
};
use acmop_geometry::inner_rotor::names::{MM_R_RO, MM_R_SI};
use acmop_geometry::search_space::{apply_named, vector_to_named};
use acmop_geometry::{DerivationEngine, MachineTemplate, ParameterRegistry};
use chrono::Utc;
use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::excitation::{self, Excitation};
use crate::identity::VariantIdentity;
use crate::variant::Variant;

/// Variant builder with its collaborators.
pub struct VariantFactory {
    winding: Arc<dyn WindingLayoutProvider>,
    stack_length: Arc<dyn StackLengthEstimator>,
    conductors: Arc<dyn SlotConductorEstimator>,
    material: Arc<dyn MaterialDataProvider>,
    engine: DerivationEngine,
    config: VariantConfig,
}

impl VariantFactory {
    /// Factory with the descriptor winding provider and steel material.
    pub fn new(
        stack_length: Arc<dyn StackLengthEstimator>,
        conductors: Arc<dyn SlotConductorEstimator>,
    ) -> Self {
        Self {
            winding: Arc::new(DescriptorWindingProvider),
            stack_length,
            conductors,
            material: Arc::new(StaticMaterialProvider),
            engine: DerivationEngine::new(),
            config: VariantConfig::default(),
        }
    }

    pub fn with_winding_provider(mut self, winding: Arc<dyn WindingLayoutProvider>) -> Self {
        self.winding = winding;
        self
    }

    pub fn with_material_provider(mut self, material: Arc<dyn MaterialDataProvider>) -> Self {
        self.material = material;
        self
    }

    pub fn with_config(mut self, config: VariantConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    pub fn winding_provider(&self) -> &dyn WindingLayoutProvider {
        self.winding.as_ref()
    }

    /// Individual name under the configured optimization flag.
    pub fn individual_name(&self, variant: &Variant) -> String {
        variant.individual_name(self.config.is_optimizing())
    }

    /// Build one variant.
    ///
    /// Without a candidate the template registry is taken as-is (the
    /// reference design) and not re-resolved. With one, the candidate is
    /// mapped onto the free parameters of a clone and every derived value
    /// is resolved. The template is never modified.
    #[instrument(skip_all, fields(counter = ?identity.counter, attempt = identity.attempt))]
    pub fn build(
        &self,
        template: &MachineTemplate,
        candidate: Option<&[f64]>,
        identity: &VariantIdentity,
    ) -> Result<Variant, VariantError> {
        let start = Instant::now();
        let spec = template.spec();
        spec.validate()?;

        let mut registry = template.registry().clone();
        if let Some(vector) = candidate {
            let named = vector_to_named(&registry, vector)?;
            apply_named(&mut registry, &named)?;
            let report = self.engine.resolve(&mut registry, spec)?;
            debug!(
                resolution_passes = report.passes,
                resolved_count = report.resolved,
                "candidate resolved"
            );
        }

        let ex = self.excitation(&registry, spec)?;
        let name = identity.name(spec);

        info!(
            variant_name = %name,
            variant_build_time = start.elapsed().as_micros() as u64,
            rotor_weight_n = ex.rotor_weight_n,
            "variant built"
        );

        Ok(Variant {
            name,
            id: identity.id(),
            created_at: Utc::now(),
            mode: template.mode(),
            registry,
            spec: Arc::clone(spec),
            ex,
        })
    }

    /// Build many candidates in parallel, numbered from `first_counter`.
    ///
    /// Results line up with `candidates`; one candidate's failure never
    /// affects another.
    pub fn build_batch(
        &self,
        template: &MachineTemplate,
        candidates: &[Vec<f64>],
        first_counter: u64,
    ) -> Vec<Result<Variant, VariantError>> {
        let results: Vec<_> = candidates
            .par_iter()
            .enumerate()
            .map(|(i, candidate)| {
                let identity = VariantIdentity::numbered(first_counter + i as u64);
                self.build(template, Some(candidate.as_slice()), &identity)
            })
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(failed, total = results.len(), "infeasible candidates in batch");
        }
        results
    }

    /// Excitation and physical properties of a resolved registry.
    pub(crate) fn excitation(
        &self,
        registry: &ParameterRegistry,
        spec: &SpecInput,
    ) -> Result<Excitation, VariantError> {
        let mm_r_ro = required(registry, MM_R_RO)?;
        let mm_r_si = required(registry, MM_R_SI)?;

        let winding_layout = self.winding.layout(spec)?;
        let specified = self.config.specified_stack_length_mm;
        let stack_length_mm = match specified {
            Some(mm) => positive_setting("variant.specified_stack_length_mm", mm)?,
            None => {
                let mm = self.stack_length.stack_length_mm(spec, mm_r_ro * MM_TO_M)?;
                if !(mm.is_finite() && mm > 0.0) {
                    return Err(VariantError::Collaborator {
                        collaborator: "stack length",
                        message: format!("estimated {mm} mm, expected a positive length"),
                    });
                }
                mm
            }
        };
        let gravity = positive_setting("variant.gravity", self.config.effective_gravity())?;
        let zq = self.conductors.conductors_per_slot(
            spec,
            &winding_layout,
            &SlotConductorQuery {
                stator_inner_diameter_m: 2.0 * mm_r_si * MM_TO_M,
                rotor_outer_diameter_m: 2.0 * mm_r_ro * MM_TO_M,
                specified_stack_length_mm: specified,
            },
        )?;

        let rotor_volume_m3 = excitation::rotor_volume_m3(mm_r_ro, stack_length_mm);
        let density = self.material.material().density_kg_m3;

        let mut ex = Excitation {
            winding_layout,
            stack_length_mm,
            mechanical_air_gap_length_mm: spec.minimum_mechanical_air_gap_length_mm,
            js: spec.js,
            winding_fill: spec.winding_fill,
            zq,
            drive_freq_hz: spec.excitation_freq_hz,
            drive_rs: DEFAULT_DRIVE_RESISTANCE_OHM,
            drive_poles: 2 * spec.p,
            rotor_volume_m3,
            rotor_weight_n: excitation::rotor_weight_n(gravity, rotor_volume_m3, density),
            speed_rpm: 0.0,
            omega_rad_s: 0.0,
        };
        ex.update_speed(spec, None)?;
        Ok(ex)
    }
}

fn required(registry: &ParameterRegistry, name: &str) -> Result<f64, VariantError> {
    registry
        .value(name)
        .ok_or_else(|| VariantError::MissingGeometry {
            name: name.to_string(),
        })
}

/// Configured physical quantities must be finite and strictly positive.
fn positive_setting(field: &str, value: f64) -> Result<f64, VariantError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(VariantError::InvalidSpec {
            field: field.to_string(),
            message: format!("must be greater than 0, got {value}"),
        })
    }
}
