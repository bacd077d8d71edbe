//! # acmop-variant
//!
//! Turns a [`MachineTemplate`](acmop_geometry::MachineTemplate) and an
//! optimizer candidate into a fully resolved [`Variant`]: geometry,
//! excitation, and rotor physical properties.

pub mod excitation;
pub mod factory;
pub mod identity;
pub mod record;
pub mod variant;

pub use excitation::Excitation;
pub use factory::VariantFactory;
pub use identity::VariantIdentity;
pub use record::VariantRecord;
pub use variant::Variant;
