use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Bounds;

/// Search-space configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Bounds per free parameter name, each written as `[lower, upper]`.
    pub bounds: BTreeMap<String, Bounds>,
}
