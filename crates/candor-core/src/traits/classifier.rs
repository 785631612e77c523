use std::sync::Arc;

use crate::errors::ScoringError;
use crate::models::{CandidateRecord, OutcomeProbability};

/// Probability-scoring capability consumed by the sensitivity sweep.
///
/// Must not observably modify anything; the sweep calls it once per legal
/// value of every attribute. How it treats missing or extra fields is the
/// implementation's own concern.
pub trait IClassifier: Send + Sync {
    /// Probability of a positive outcome for a fully populated record.
    fn predict_proba(&self, record: &CandidateRecord)
        -> Result<OutcomeProbability, ScoringError>;

    /// Human-readable classifier name.
    fn name(&self) -> &str {
        "classifier"
    }
}

impl<T: IClassifier + ?Sized> IClassifier for &T {
    fn predict_proba(
        &self,
        record: &CandidateRecord,
    ) -> Result<OutcomeProbability, ScoringError> {
        (**self).predict_proba(record)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: IClassifier + ?Sized> IClassifier for Box<T> {
    fn predict_proba(
        &self,
        record: &CandidateRecord,
    ) -> Result<OutcomeProbability, ScoringError> {
        (**self).predict_proba(record)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: IClassifier + ?Sized> IClassifier for Arc<T> {
    fn predict_proba(
        &self,
        record: &CandidateRecord,
    ) -> Result<OutcomeProbability, ScoringError> {
        (**self).predict_proba(record)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
