//! Configuration system for acmop.
//! TOML-based, 3-layer resolution: CLI > env > project > defaults.

pub mod acmop_config;
pub mod geometry_config;
pub mod search_config;
pub mod variant_config;

pub use acmop_config::{AcmopConfig, CliOverrides};
pub use geometry_config::GeometryConfig;
pub use search_config::SearchConfig;
pub use variant_config::VariantConfig;
