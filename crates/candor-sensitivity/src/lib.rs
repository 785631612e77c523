//! # candor-sensitivity
//!
//! Counterfactual sensitivity scoring: for every vocabulary attribute present
//! in a candidate record, re-score the record once per legal value of that
//! attribute (all other fields held fixed) and normalize the candidate's own
//! probability against the best one.
//!
//! | Situation | Outcome |
//! |-----------|---------|
//! | attribute absent from the record | omitted |
//! | candidate value not a legal value | score 0 |
//! | every enumerated probability is 0 | score 0 |
//! | otherwise | `10 * p_actual / p_max` |
//!
//! A classifier failure on any perturbed record aborts the whole report.

pub mod engine;
pub mod normalize;
pub mod radar;
pub mod sweep;

pub use engine::{compute_score_report, CounterfactualScorer};
pub use normalize::{normalize, Normalization};
pub use radar::{RadarAxis, RadarChart};
pub use sweep::{AttributeSweep, ValueOutcome};
