//! CounterfactualScorer — sweeps every eligible attribute and assembles the
//! score report.

use candor_core::{
    AttributeScore, CandidateRecord, DomainVocabulary, IClassifier, ScoreReport, ScoringError,
};

use crate::normalize::{normalize, Normalization};
use crate::sweep::AttributeSweep;

/// Compute the sensitivity profile of `record`.
///
/// Attributes are visited in vocabulary order. Only classifier failures
/// escape; a value with no match and an all-zero sweep both score 0.
pub fn compute_score_report<C>(
    classifier: &C,
    vocabulary: &DomainVocabulary,
    record: &CandidateRecord,
) -> Result<ScoreReport, ScoringError>
where
    C: IClassifier + ?Sized,
{
    let span = tracing::debug_span!(
        "sensitivity_sweep",
        classifier = classifier.name(),
        attributes = vocabulary.len()
    );
    let _guard = span.enter();

    let mut report = ScoreReport::new();
    let mut calls = 0usize;

    for attribute in vocabulary {
        let Some(actual) = record.get(attribute.id()) else {
            continue;
        };
        if attribute.values().is_empty() {
            tracing::debug!(attribute = attribute.id(), "attribute has no legal values");
            continue;
        }

        let sweep = match AttributeSweep::run(classifier, attribute, record) {
            Ok(sweep) => sweep,
            Err(e) => {
                tracing::warn!(
                    attribute = attribute.id(),
                    error = %e,
                    "classifier failed during sweep"
                );
                return Err(e);
            }
        };
        calls += sweep.outcomes.len();

        let normalization = normalize(&sweep, actual);
        if normalization == Normalization::Floored {
            tracing::debug!(attribute = attribute.id(), "attribute floored to 0");
        }

        report.push(AttributeScore {
            attribute: attribute.id().to_string(),
            label: attribute.label(),
            score: normalization.score(),
        });
    }

    tracing::debug!(calls, scored = report.len(), "sensitivity sweep complete");
    Ok(report)
}

/// A classifier and vocabulary bound together, reusable across candidates.
///
/// Holds no per-candidate state: every call builds and discards its own
/// perturbed copies, so one scorer can serve any number of records.
pub struct CounterfactualScorer<C: IClassifier> {
    classifier: C,
    vocabulary: DomainVocabulary,
}

impl<C: IClassifier> CounterfactualScorer<C> {
    pub fn new(classifier: C, vocabulary: DomainVocabulary) -> Self {
        Self {
            classifier,
            vocabulary,
        }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn vocabulary(&self) -> &DomainVocabulary {
        &self.vocabulary
    }

    /// Sensitivity profile for one candidate.
    pub fn score(&self, record: &CandidateRecord) -> Result<ScoreReport, ScoringError> {
        compute_score_report(&self.classifier, &self.vocabulary, record)
    }

    /// Number of classifier calls a full sweep of `record` will make.
    pub fn planned_calls(&self, record: &CandidateRecord) -> usize {
        self.vocabulary
            .iter()
            .filter(|a| record.contains(a.id()))
            .map(|a| a.values().len())
            .sum()
    }
}
