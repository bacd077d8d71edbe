use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a geometric parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// Supplied once, never recomputed.
    Fixed,
    /// Supplied or searched by the optimizer; carries bounds.
    Free,
    /// Computed from other parameters by a calc function.
    Derived,
}

impl ParameterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Free => "free",
            Self::Derived => "derived",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
