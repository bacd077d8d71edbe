//! Error handling for acmop.
//! One error enum per subsystem, `thiserror` only.

pub mod acmop_error;
pub mod config_error;
pub mod error_code;
pub mod geometry_error;
pub mod variant_error;

pub use acmop_error::{AcmopError, AcmopResult};
pub use config_error::ConfigError;
pub use error_code::AcmopErrorCode;
pub use geometry_error::GeometryError;
pub use variant_error::VariantError;
