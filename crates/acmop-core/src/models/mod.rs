//! Plain data types shared across the workspace.

pub mod bounds;
pub mod mode;
pub mod parameter_kind;
pub mod snapshot;
pub mod spec_input;

pub use bounds::Bounds;
pub use mode::ConfigurationMode;
pub use parameter_kind::ParameterKind;
pub use snapshot::SnapshotEntry;
pub use spec_input::{SpecInput, WindingScheme};
