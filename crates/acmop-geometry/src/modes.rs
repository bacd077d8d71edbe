//! Kind reclassification tables for each configuration mode.

use acmop_core::errors::GeometryError;
use acmop_core::models::{ConfigurationMode, ParameterKind};
use tracing::debug;

use crate::inner_rotor::names::*;
use crate::registry::ParameterRegistry;

use ParameterKind::{Derived, Fixed, Free};

/// Parameters whose kind a mode overrides, relative to the default table.
pub fn kind_overrides(mode: ConfigurationMode) -> &'static [(&'static str, ParameterKind)] {
    match mode {
        ConfigurationMode::FixedSleeveLength => &[(MM_D_STO, Free), (MM_D_SLEEVE, Fixed)],
        ConfigurationMode::VariableSleeveLength => &[(MM_D_STO, Free), (MM_D_SLEEVE, Free)],
        ConfigurationMode::VariableStatorSlotDepthVariableStatorYokeDepth => {
            &[(MM_D_STO, Free), (MM_D_MECH_AIR_GAP, Free)]
        }
        ConfigurationMode::VariableSleeveLengthVariableToothTipDepth => {
            &[(MM_D_STO, Fixed), (MM_D_STT, Free), (MM_D_SLEEVE, Free)]
        }
        ConfigurationMode::VariableToothTipDepthFspm => &[
            (MM_D_STO, Fixed),
            (MM_D_STT, Free),
            (MM_D_SLEEVE, Fixed),
            (MM_W_ST, Fixed),
            (MM_D_ST, Derived),
        ],
    }
}

/// Apply a mode's overrides, then re-check that every derived parameter
/// still has a calc function.
pub fn apply_mode(
    registry: &mut ParameterRegistry,
    mode: ConfigurationMode,
) -> Result<(), GeometryError> {
    for &(name, kind) in kind_overrides(mode) {
        registry.set_kind(name, kind)?;
    }
    registry.validate()?;
    debug!(%mode, free = registry.free_count(), derived = registry.derived_count(), "configuration mode applied");
    Ok(())
}
