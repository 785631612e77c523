//! Stub classifiers for exercising the sensitivity sweep without a model.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use candor_core::{CandidateRecord, IClassifier, OutcomeProbability, ScoringError};

/// Product-of-tables classifier.
///
/// Each configured attribute contributes the factor listed for the record's
/// value; the probability is the product of all factors. With a single
/// configured attribute this is a plain lookup table. A configured attribute
/// missing from the record is a schema mismatch; an unlisted value is an
/// unknown category.
#[derive(Debug, Clone, Default)]
pub struct TableClassifier {
    table: BTreeMap<String, BTreeMap<String, f64>>,
}

impl TableClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attribute: &str, value: &str, p: f64) -> Self {
        self.table
            .entry(attribute.to_string())
            .or_default()
            .insert(value.to_string(), p);
        self
    }
}

impl IClassifier for TableClassifier {
    fn predict_proba(
        &self,
        record: &CandidateRecord,
    ) -> Result<OutcomeProbability, ScoringError> {
        let mut p = 1.0;
        for (attribute, values) in &self.table {
            let value = record
                .get(attribute)
                .ok_or_else(|| ScoringError::SchemaMismatch {
                    reason: format!("missing {attribute}"),
                })?;
            let factor = values
                .get(value)
                .ok_or_else(|| ScoringError::UnknownCategory {
                    attribute: attribute.clone(),
                    value: value.to_string(),
                })?;
            p *= factor;
        }
        OutcomeProbability::new(p)
    }

    fn name(&self) -> &str {
        "table"
    }
}

/// Classifier backed by a closure returning a raw probability.
pub struct FnClassifier<F> {
    f: F,
}

impl<F> FnClassifier<F>
where
    F: Fn(&CandidateRecord) -> f64 + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> IClassifier for FnClassifier<F>
where
    F: Fn(&CandidateRecord) -> f64 + Send + Sync,
{
    fn predict_proba(
        &self,
        record: &CandidateRecord,
    ) -> Result<OutcomeProbability, ScoringError> {
        OutcomeProbability::new((self.f)(record))
    }

    fn name(&self) -> &str {
        "fn"
    }
}

/// Delegates to `inner` except when `attribute` holds `value`, where it fails.
pub struct FailingClassifier<C> {
    inner: C,
    attribute: String,
    value: String,
}

impl<C: IClassifier> FailingClassifier<C> {
    pub fn on(attribute: &str, value: &str, inner: C) -> Self {
        Self {
            inner,
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }
}

impl<C: IClassifier> IClassifier for FailingClassifier<C> {
    fn predict_proba(
        &self,
        record: &CandidateRecord,
    ) -> Result<OutcomeProbability, ScoringError> {
        if record.get(&self.attribute) == Some(self.value.as_str()) {
            return Err(ScoringError::InferenceFailed {
                reason: format!("stub refuses {}={}", self.attribute, self.value),
            });
        }
        self.inner.predict_proba(record)
    }
}

/// Records every call made through it.
pub struct CountingClassifier<C> {
    inner: C,
    calls: AtomicUsize,
    seen: Mutex<Vec<CandidateRecord>>,
}

impl<C: IClassifier> CountingClassifier<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every record passed in, in call order.
    pub fn seen(&self) -> Vec<CandidateRecord> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
        if let Ok(mut seen) = self.seen.lock() {
            seen.clear();
        }
    }
}

impl<C: IClassifier> IClassifier for CountingClassifier<C> {
    fn predict_proba(
        &self,
        record: &CandidateRecord,
    ) -> Result<OutcomeProbability, ScoringError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(record.clone());
        }
        self.inner.predict_proba(record)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
