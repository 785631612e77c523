use super::error_code::CandorErrorCode;
use super::{ConfigError, IntakeError, ScoringError, StorageError};
use crate::constants::PROFILE_UNAVAILABLE_MESSAGE;

/// Top-level error for the Candor workspace.
#[derive(Debug, thiserror::Error)]
pub enum CandorError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Intake(#[from] IntakeError),
}

pub type CandorResult<T> = Result<T, CandorError>;

impl CandorError {
    /// Message safe to show the candidate. Scoring failures never leak
    /// classifier internals.
    pub fn user_message(&self) -> String {
        match self {
            Self::Scoring(_) => PROFILE_UNAVAILABLE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl CandorErrorCode for CandorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scoring(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Intake(e) => e.error_code(),
        }
    }
}
