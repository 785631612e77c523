//! LogisticClassifier — `p = sigmoid(intercept + Σ weight(attribute, value))`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use candor_core::errors::ConfigError;
use candor_core::{CandidateRecord, IClassifier, OutcomeProbability, ScoringError};

/// Serialized form of the model.
///
/// ```json
/// {
///   "name": "hiring-logit",
///   "intercept": -0.5,
///   "weights": { "english_level": { "None": -1.0, "Fluent": 1.2 } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    #[serde(default = "default_name")]
    pub name: String,
    pub intercept: f64,
    /// Attribute id → value → weight. Every attribute listed here must be
    /// present in a scored record.
    pub weights: BTreeMap<String, BTreeMap<String, f64>>,
}

fn default_name() -> String {
    "logistic".to_string()
}

/// Logistic classifier over categorical attributes.
///
/// Fields of the record that the model has no weights for are ignored.
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    model: LogisticModel,
}

impl LogisticClassifier {
    pub fn new(model: LogisticModel) -> Result<Self, ConfigError> {
        if !model.intercept.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "intercept".to_string(),
                message: "must be finite".to_string(),
            });
        }
        for (attribute, values) in &model.weights {
            if values.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("weights.{attribute}"),
                    message: "must list at least one value".to_string(),
                });
            }
            if let Some((value, _)) = values.iter().find(|(_, w)| !w.is_finite()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("weights.{attribute}.{value}"),
                    message: "must be finite".to_string(),
                });
            }
        }
        Ok(Self { model })
    }

    /// Parse a model from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::parse(json, "<string>")
    }

    /// Load a model from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let classifier = Self::parse(&content, &path.display().to_string())?;
        tracing::info!(
            model = %classifier.model.name,
            attributes = classifier.model.weights.len(),
            path = %path.display(),
            "logistic model loaded"
        );
        Ok(classifier)
    }

    /// `source` names the document in parse errors.
    fn parse(json: &str, source: &str) -> Result<Self, ConfigError> {
        let model: LogisticModel =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;
        Self::new(model)
    }

    pub fn model(&self) -> &LogisticModel {
        &self.model
    }

    /// Linear predictor before the sigmoid.
    fn logit(&self, record: &CandidateRecord) -> Result<f64, ScoringError> {
        let mut z = self.model.intercept;
        for (attribute, values) in &self.model.weights {
            let value = record
                .get(attribute)
                .ok_or_else(|| ScoringError::SchemaMismatch {
                    reason: format!("record has no value for {attribute}"),
                })?;
            let weight = values
                .get(value)
                .ok_or_else(|| ScoringError::UnknownCategory {
                    attribute: attribute.clone(),
                    value: value.to_string(),
                })?;
            z += weight;
        }
        Ok(z)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl IClassifier for LogisticClassifier {
    fn predict_proba(
        &self,
        record: &CandidateRecord,
    ) -> Result<OutcomeProbability, ScoringError> {
        let z = self.logit(record)?;
        if !z.is_finite() {
            return Err(ScoringError::InferenceFailed {
                reason: format!("non-finite logit {z}"),
            });
        }
        OutcomeProbability::new(sigmoid(z))
    }

    fn name(&self) -> &str {
        &self.model.name
    }
}
