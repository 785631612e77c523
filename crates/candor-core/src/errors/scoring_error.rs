use super::error_code::{self, CandorErrorCode};

/// The classifier could not produce a probability for a (possibly perturbed)
/// record. Aborts the whole sensitivity sweep.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("unknown category for {attribute}: {value}")]
    UnknownCategory { attribute: String, value: String },

    #[error("record does not match classifier schema: {reason}")]
    SchemaMismatch { reason: String },

    #[error("probability out of range [0, 1]: {value}")]
    InvalidProbability { value: f64 },
}

impl CandorErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        error_code::SCORING_ERROR
    }
}
