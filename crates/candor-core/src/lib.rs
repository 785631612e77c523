//! # candor-core
//!
//! Foundation crate for the Candor assessment system.
//! Defines the domain vocabulary, candidate records, probabilities, score
//! reports, the classifier and record-store ports, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CandorConfig;
pub use errors::{CandorError, CandorResult, ScoringError};
pub use models::{
    Assessment, Attribute, AttributeScore, CandidateRecord, DomainVocabulary, OutcomeProbability,
    ScoreReport, StoredRecord,
};
pub use traits::{IClassifier, IRecordStore};
