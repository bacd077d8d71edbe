//! AcmopErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable code string
/// that optimizer front-ends can match on without parsing messages.
pub trait AcmopErrorCode {
    /// Returns the error code string (e.g., "CONFIGURATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn display_code(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";
pub const DEPENDENCY_UNRESOLVED: &str = "DEPENDENCY_UNRESOLVED";
pub const NON_POSITIVE_DERIVED_VALUE: &str = "NON_POSITIVE_DERIVED_VALUE";
pub const NON_FINITE_DERIVED_VALUE: &str = "NON_FINITE_DERIVED_VALUE";
pub const VECTOR_LENGTH_MISMATCH: &str = "VECTOR_LENGTH_MISMATCH";
pub const COLLABORATOR_ERROR: &str = "COLLABORATOR_ERROR";
pub const MISSING_GEOMETRY: &str = "MISSING_GEOMETRY";
pub const NOT_SUPPORTED: &str = "NOT_SUPPORTED";
