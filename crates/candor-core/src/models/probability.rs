use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ScoringError;

/// Classifier estimate of a positive outcome, always within [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct OutcomeProbability(f64);

impl OutcomeProbability {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    /// Checked constructor. NaN and anything outside [0, 1] is a scoring
    /// failure, not something to clamp away.
    pub fn new(value: f64) -> Result<Self, ScoringError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoringError::InvalidProbability { value })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for OutcomeProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

impl TryFrom<f64> for OutcomeProbability {
    type Error = ScoringError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OutcomeProbability> for f64 {
    fn from(p: OutcomeProbability) -> Self {
        p.0
    }
}

impl<'de> Deserialize<'de> for OutcomeProbability {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_and_nan() {
        assert!(OutcomeProbability::new(-0.01).is_err());
        assert!(OutcomeProbability::new(1.01).is_err());
        assert!(OutcomeProbability::new(f64::NAN).is_err());
        assert!(OutcomeProbability::new(0.0).is_ok());
        assert!(OutcomeProbability::new(1.0).is_ok());
    }

    #[test]
    fn displays_as_percentage() {
        let p = OutcomeProbability::new(0.25).unwrap();
        assert_eq!(p.to_string(), "25.0%");
        assert_eq!(OutcomeProbability::ONE.to_string(), "100.0%");
    }
}
