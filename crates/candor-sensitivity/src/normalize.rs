//! Turning one attribute sweep into a 0–10 score.

use candor_core::constants::{SCORE_CEILING, SCORE_FLOOR};

use crate::sweep::AttributeSweep;

/// Outcome of normalizing one attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// `10 * p_actual / p_max`.
    Scored(f64),
    /// No enumerated value matches the candidate's, or every enumerated
    /// probability is zero. Both report score 0.
    Floored,
}

impl Normalization {
    pub fn score(self) -> f64 {
        match self {
            Self::Scored(score) => score,
            Self::Floored => SCORE_FLOOR,
        }
    }
}

/// Normalize the candidate's `actual` value against the best value of the
/// sweep.
pub fn normalize(sweep: &AttributeSweep, actual: &str) -> Normalization {
    let p_max = sweep.max_probability();
    match sweep.probability_of(actual) {
        Some(p_actual) if p_max > 0.0 => {
            let score = SCORE_CEILING * (p_actual / p_max);
            Normalization::Scored(score.clamp(SCORE_FLOOR, SCORE_CEILING))
        }
        _ => Normalization::Floored,
    }
}
