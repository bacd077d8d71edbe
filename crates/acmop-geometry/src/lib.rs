//! # acmop-geometry
//!
//! Named geometric parameters of a machine cross-section, the modes that
//! classify them, and the engine that resolves derived values.
//!
//! - [`ParameterRegistry`]: ordered name → [`Parameter`] map.
//! - [`DerivationEngine`]: bounded fixpoint resolution of derived values.
//! - [`search_space`]: free-parameter vector ↔ named values, bounds.
//! - [`MachineTemplate`]: the per-topology registry variants are cloned from.

pub mod catalog;
pub mod engine;
pub mod inner_rotor;
pub mod modes;
pub mod parameter;
pub mod registry;
pub mod search_space;
pub mod template;

pub use catalog::FormulaCatalog;
pub use engine::{DerivationEngine, ResolutionReport};
pub use parameter::{CalcFn, Parameter, Unresolved};
pub use registry::{ParameterRecord, ParameterRegistry, RegistrySnapshot};
pub use search_space::{NamedVector, SearchSpace};
pub use template::MachineTemplate;
