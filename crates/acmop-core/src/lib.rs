//! # acmop-core
//!
//! Foundation crate for the acmop machine geometry engine.
//! Defines the shared types, collaborator traits, errors, config, tracing
//! setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AcmopConfig;
pub use errors::{AcmopError, ConfigError, GeometryError, VariantError};
pub use models::{Bounds, ConfigurationMode, ParameterKind, SnapshotEntry, SpecInput, WindingScheme};
