pub mod candor_error;
pub mod config_error;
pub mod error_code;
pub mod intake_error;
pub mod scoring_error;
pub mod storage_error;

pub use candor_error::{CandorError, CandorResult};
pub use config_error::ConfigError;
pub use error_code::CandorErrorCode;
pub use intake_error::IntakeError;
pub use scoring_error::ScoringError;
pub use storage_error::StorageError;
