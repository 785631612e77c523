//! One-at-a-time perturbation of a single attribute.

use candor_core::{Attribute, CandidateRecord, IClassifier, ScoringError};

/// Probability observed for one legal value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueOutcome {
    pub value: String,
    pub probability: f64,
}

/// Every legal value of one attribute paired with the classifier's answer
/// for the record perturbed to that value. Outcomes keep vocabulary order.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSweep {
    pub attribute: String,
    pub outcomes: Vec<ValueOutcome>,
}

impl AttributeSweep {
    /// Score every legal value of `attribute` against a private copy of
    /// `record`. One classifier call per value, the candidate's own value
    /// included; the first failure is returned as-is.
    pub fn run<C>(
        classifier: &C,
        attribute: &Attribute,
        record: &CandidateRecord,
    ) -> Result<Self, ScoringError>
    where
        C: IClassifier + ?Sized,
    {
        let outcomes = attribute
            .values()
            .iter()
            .map(|value| {
                let perturbed = record.perturbed(attribute.id(), value);
                let p = classifier.predict_proba(&perturbed)?;
                Ok(ValueOutcome {
                    value: value.clone(),
                    probability: p.value(),
                })
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        Ok(Self {
            attribute: attribute.id().to_string(),
            outcomes,
        })
    }

    /// Probability paired with `value`, by exact string match.
    pub fn probability_of(&self, value: &str) -> Option<f64> {
        self.outcomes
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.probability)
    }

    /// Highest probability across all outcomes; 0 for an empty sweep.
    pub fn max_probability(&self) -> f64 {
        self.outcomes
            .iter()
            .map(|o| o.probability)
            .fold(0.0, f64::max)
    }

    /// The value reaching the maximum, first one on ties.
    pub fn best_value(&self) -> Option<&str> {
        let max = self.max_probability();
        self.outcomes
            .iter()
            .find(|o| o.probability == max)
            .map(|o| o.value.as_str())
    }
}
