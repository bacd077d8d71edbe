//! Inner-rotor cross-section: parameter table and formulas.
//!
//! Lengths are in millimetres, angles in degrees. The `split_ratio` is
//! stator inner radius over stator outer radius.

use acmop_core::errors::GeometryError;
use acmop_core::models::{ConfigurationMode, SpecInput};
use tracing::instrument;

use crate::catalog::FormulaCatalog;
use crate::modes;
use crate::parameter::{Parameter, Unresolved};
use crate::registry::ParameterRegistry;

/// Parameter names of the inner-rotor table.
pub mod names {
    // Rotor
    pub const MM_R_RO: &str = "mm_r_ro";
    pub const MM_D_MECH_AIR_GAP: &str = "mm_d_mech_air_gap";
    pub const MM_D_SLEEVE: &str = "mm_d_sleeve";
    pub const SPLIT_RATIO: &str = "split_ratio";
    // Stator
    pub const DEG_ALPHA_ST: &str = "deg_alpha_st";
    pub const MM_W_ST: &str = "mm_w_st";
    pub const MM_D_ST: &str = "mm_d_st";
    pub const MM_D_STO: &str = "mm_d_sto";
    pub const DEG_ALPHA_STO: &str = "deg_alpha_sto";
    pub const MM_D_STT: &str = "mm_d_stt";
    pub const MM_R_SI: &str = "mm_r_si";
    pub const MM_R_SO: &str = "mm_r_so";
    pub const MM_D_SY: &str = "mm_d_sy";
}

use names::*;

type Formula = Result<f64, Unresolved>;

/// Stator inner radius from the rotor side: rotor radius plus both clearances.
pub fn derive_mm_r_si(gp: &ParameterRegistry, _si: &SpecInput) -> Formula {
    Ok(gp.require(MM_R_RO)? + gp.require(MM_D_SLEEVE)? + gp.require(MM_D_MECH_AIR_GAP)?)
}

/// Half the tooth span, which keeps the tooth tip square.
pub fn derive_deg_alpha_sto(gp: &ParameterRegistry, _si: &SpecInput) -> Formula {
    Ok(gp.require(DEG_ALPHA_ST)? / 2.0)
}

pub fn derive_mm_d_stt(gp: &ParameterRegistry, _si: &SpecInput) -> Formula {
    Ok(1.5 * gp.require(MM_D_STO)?)
}

pub fn derive_mm_d_st(gp: &ParameterRegistry, _si: &SpecInput) -> Formula {
    Ok(gp.require(MM_R_SO)? - gp.require(MM_R_SI)? - gp.require(MM_D_SY)? - gp.require(MM_D_STT)?)
}

pub fn derive_mm_d_sy(gp: &ParameterRegistry, _si: &SpecInput) -> Formula {
    Ok(gp.require(MM_R_SO)? - gp.require(MM_R_SI)? - gp.require(MM_D_ST)? - gp.require(MM_D_STT)?)
}

/// Outer radius from the split ratio. Deriving it this way, rather than
/// stacking yoke depth on the teeth, keeps the yoke depth from going negative.
pub fn derive_mm_r_so(gp: &ParameterRegistry, _si: &SpecInput) -> Formula {
    Ok(gp.require(MM_R_SI)? / gp.require(SPLIT_RATIO)?)
}

/// Every formula of the table, keyed by the parameter it computes.
pub fn catalog() -> FormulaCatalog {
    let mut catalog = FormulaCatalog::new();
    catalog
        .register(MM_D_ST, derive_mm_d_st)
        .register(DEG_ALPHA_STO, derive_deg_alpha_sto)
        .register(MM_D_STT, derive_mm_d_stt)
        .register(MM_R_SI, derive_mm_r_si)
        .register(MM_R_SO, derive_mm_r_so)
        .register(MM_D_SY, derive_mm_d_sy);
    catalog
}

/// The default table before any mode is applied. Values are unset.
pub fn default_parameters() -> Vec<Parameter> {
    vec![
        // Rotor
        Parameter::fixed(MM_R_RO, "rotor_outer_radius"),
        Parameter::fixed(MM_D_MECH_AIR_GAP, "mechanical_air_gap_length"),
        Parameter::free(MM_D_SLEEVE, "sleeve_length"),
        Parameter::free(SPLIT_RATIO, "split_ratio_r_is_slash_r_os"),
        // Stator
        Parameter::free(DEG_ALPHA_ST, "stator_tooth_span_angle"),
        Parameter::free(MM_W_ST, "stator_tooth_width"),
        Parameter::free(MM_D_ST, "stator_tooth_depth").with_calc(derive_mm_d_st),
        Parameter::fixed(MM_D_STO, "stator_tooth_open_depth"),
        Parameter::derived(DEG_ALPHA_STO, "stator_tooth_open_angle", derive_deg_alpha_sto),
        Parameter::derived(MM_D_STT, "stator_tooth_tip_depth", derive_mm_d_stt),
        Parameter::derived(MM_R_SI, "stator_inner_radius", derive_mm_r_si),
        Parameter::derived(MM_R_SO, "stator_outer_radius", derive_mm_r_so),
        Parameter::fixed(MM_D_SY, "stator_yoke_depth").with_calc(derive_mm_d_sy),
    ]
}

impl ParameterRegistry {
    /// Build the inner-rotor table and apply `mode` to it.
    #[instrument(level = "debug")]
    pub fn construct(mode: ConfigurationMode) -> Result<Self, GeometryError> {
        let mut registry = Self::from_parameters(default_parameters())?;
        modes::apply_mode(&mut registry, mode)?;
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_calc_in_table() {
        let catalog = catalog();
        for p in default_parameters() {
            assert_eq!(p.calc.is_some(), catalog.get(&p.name).is_some(), "{}", p.name);
        }
    }

    #[test]
    fn test_default_table_has_thirteen_parameters() {
        assert_eq!(default_parameters().len(), 13);
    }
}
