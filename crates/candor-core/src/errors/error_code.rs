//! CandorErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait CandorErrorCode {
    /// Returns the error code string (e.g., "SCORING_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn tagged(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCORING_ERROR: &str = "SCORING_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INTAKE_ERROR: &str = "INTAKE_ERROR";
