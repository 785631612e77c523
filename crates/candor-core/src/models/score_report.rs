use serde::{Deserialize, Serialize};

/// One row of a sensitivity profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeScore {
    /// Attribute id as it appears in the record.
    pub attribute: String,
    /// Human-readable label, the report key.
    pub label: String,
    /// Normalized score in [0, 10].
    pub score: f64,
}

/// Per-attribute 0–10 sensitivity profile for one candidate, in vocabulary
/// order. Derived per scoring call and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreReport {
    entries: Vec<AttributeScore>,
}

impl ScoreReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: AttributeScore) {
        self.entries.push(entry);
    }

    /// Score for a label, e.g. `"Language Level"`.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.score)
    }

    /// Score for a raw attribute id, e.g. `"language_level"`.
    pub fn get_by_attribute(&self, attribute: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.attribute == attribute)
            .map(|e| e.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeScore> {
        self.entries.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.score).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScoreReport {
    type Item = &'a AttributeScore;
    type IntoIter = std::slice::Iter<'a, AttributeScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
