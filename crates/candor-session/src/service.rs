//! AssessmentService — store, score, and profile one submission.

use std::path::Path;

use candor_classifier::LogisticClassifier;
use candor_core::errors::{CandorError, CandorResult};
use candor_core::{
    Assessment, CandidateRecord, CandorConfig, DomainVocabulary, IClassifier, IRecordStore,
    StoredRecord,
};
use candor_observability::events;
use candor_sensitivity::{CounterfactualScorer, RadarChart};
use candor_storage::RecordStore;

use crate::intake::IntakeForm;

/// Service over the logistic classifier and the SQLite store.
pub type DefaultAssessmentService = AssessmentService<LogisticClassifier, RecordStore>;

/// Runs the full submission flow. The classifier, vocabulary and store are
/// owned values: several services with different configurations can live in
/// one process.
pub struct AssessmentService<C: IClassifier, S: IRecordStore> {
    scorer: CounterfactualScorer<C>,
    store: S,
}

impl<C: IClassifier, S: IRecordStore> AssessmentService<C, S> {
    pub fn new(classifier: C, vocabulary: DomainVocabulary, store: S) -> Self {
        Self {
            scorer: CounterfactualScorer::new(classifier, vocabulary),
            store,
        }
    }

    pub fn scorer(&self) -> &CounterfactualScorer<C> {
        &self.scorer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append the record, then compute the overall probability and the
    /// sensitivity profile.
    ///
    /// The record is persisted even if scoring later fails. On any scoring
    /// failure neither the probability nor a partial profile is returned.
    pub fn assess(&self, record: CandidateRecord) -> CandorResult<Assessment> {
        let stored = StoredRecord::new(record);
        self.store.append(&stored)?;
        events::submission_recorded(&stored.id, stored.record.len());

        let result = self
            .scorer
            .classifier()
            .predict_proba(&stored.record)
            .and_then(|probability| {
                let report = self.scorer.score(&stored.record)?;
                Ok(Assessment {
                    probability,
                    report,
                })
            });

        match result {
            Ok(assessment) => {
                events::profile_computed(
                    &stored.id,
                    assessment.probability.value(),
                    assessment.report.len(),
                );
                Ok(assessment)
            }
            Err(e) => {
                events::scoring_failed(&stored.id, &e.to_string());
                Err(CandorError::Scoring(e))
            }
        }
    }

    /// Validate form answers, then [`assess`](Self::assess) the record.
    /// Rejected answers are neither stored nor scored.
    pub fn submit<I, K, V>(&self, form: &IntakeForm, answers: I) -> CandorResult<Assessment>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let record = form.submit(answers).map_err(|e| {
            events::submission_rejected(&e.to_string());
            e
        })?;
        self.assess(record)
    }
}

impl DefaultAssessmentService {
    /// Build the service described by `config`: the model at
    /// `classifier.model_path` and the store at `storage.db_path`.
    pub fn from_config(config: &CandorConfig) -> CandorResult<Self> {
        let classifier = LogisticClassifier::load(Path::new(&config.classifier.model_path))?;
        let store = RecordStore::from_config(&config.storage);
        tracing::info!(
            model = classifier.name(),
            attributes = config.vocabulary.attributes.len(),
            "assessment service ready"
        );
        Ok(Self::new(classifier, config.domain_vocabulary(), store))
    }
}

/// Radar layout for an assessment.
pub fn radar_for(assessment: &Assessment) -> RadarChart {
    RadarChart::from_report(&assessment.report, assessment.probability)
}
