//! Material-data provider.

/// Constants for the rotor core material.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialData {
    pub name: String,
    /// Mass density (kg/m^3).
    pub density_kg_m3: f64,
}

/// Supplies material constants for weight computation.
pub trait MaterialDataProvider: Send + Sync {
    fn material(&self) -> MaterialData;
}

/// Electrical steel at 8050 kg/m^3.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMaterialProvider;

impl StaticMaterialProvider {
    pub const STEEL_DENSITY_KG_M3: f64 = 8050.0;
}

impl MaterialDataProvider for StaticMaterialProvider {
    fn material(&self) -> MaterialData {
        MaterialData {
            name: "steel".to_string(),
            density_kg_m3: Self::STEEL_DENSITY_KG_M3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_returns_steel() {
        let data = StaticMaterialProvider.material();
        assert_eq!(data.name, "steel");
        assert_eq!(data.density_kg_m3, 8050.0);
    }
}
