use serde::{Deserialize, Serialize};

/// Geometry template configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Topology filter name, e.g. `FixedSleeveLength`.
    pub mode: Option<String>,
}
