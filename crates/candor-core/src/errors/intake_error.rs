use super::error_code::{self, CandorErrorCode};

/// Form submission errors. Raised before anything is stored or scored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("missing answer for {field}")]
    MissingField { field: String },

    #[error("{value:?} is not an option of {field}")]
    InvalidOption { field: String, value: String },

    #[error("form has no field named {field}")]
    UnknownField { field: String },
}

impl CandorErrorCode for IntakeError {
    fn error_code(&self) -> &'static str {
        error_code::INTAKE_ERROR
    }
}
