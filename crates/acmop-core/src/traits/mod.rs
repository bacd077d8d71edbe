//! Narrow read-only interfaces to collaborators outside the geometry core.
//!
//! Each trait ships a static implementation for standalone use; real
//! winding, stack-length, and material models plug in from outside.

pub mod conductors;
pub mod material;
pub mod stack_length;
pub mod winding;

pub use conductors::{FixedSlotConductors, SlotConductorEstimator, SlotConductorQuery};
pub use material::{MaterialData, MaterialDataProvider, StaticMaterialProvider};
pub use stack_length::{FixedStackLength, StackLengthEstimator};
pub use winding::{DescriptorWindingProvider, WindingLayout, WindingLayoutProvider};
