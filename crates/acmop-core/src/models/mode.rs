//! Configuration modes: which parameters a topology searches over.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GeometryError;

/// Closed set of supported topology filters.
///
/// Each mode reclassifies a few parameters of the default inner-rotor
/// table. Names round-trip through the filter strings used in
/// optimization config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ConfigurationMode {
    /// Sleeve length fixed, tooth-open depth searched.
    FixedSleeveLength,
    /// Both sleeve length and tooth-open depth searched.
    VariableSleeveLength,
    /// Induction machine: mechanical air gap and tooth-open depth searched.
    VariableStatorSlotDepthVariableStatorYokeDepth,
    /// Sleeve length and tooth-tip depth searched, tooth-open depth fixed.
    VariableSleeveLengthVariableToothTipDepth,
    /// Flux-switching PM: tooth-tip depth searched, tooth depth derived.
    VariableToothTipDepthFspm,
}

impl ConfigurationMode {
    pub const ALL: [ConfigurationMode; 5] = [
        Self::FixedSleeveLength,
        Self::VariableSleeveLength,
        Self::VariableStatorSlotDepthVariableStatorYokeDepth,
        Self::VariableSleeveLengthVariableToothTipDepth,
        Self::VariableToothTipDepthFspm,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FixedSleeveLength => "FixedSleeveLength",
            Self::VariableSleeveLength => "VariableSleeveLength",
            Self::VariableStatorSlotDepthVariableStatorYokeDepth => {
                "VariableStatorSlotDepth_VariableStatorYokeDepth"
            }
            Self::VariableSleeveLengthVariableToothTipDepth => {
                "VariableSleeveLength_VariableToothTipDepth"
            }
            Self::VariableToothTipDepthFspm => "VariableToothTipDepth_FSPM",
        }
    }
}

impl fmt::Display for ConfigurationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigurationMode {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| GeometryError::UnknownMode { mode: s.to_string() })
    }
}

impl TryFrom<String> for ConfigurationMode {
    type Error = GeometryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ConfigurationMode> for String {
    fn from(mode: ConfigurationMode) -> Self {
        mode.as_str().to_string()
    }
}
