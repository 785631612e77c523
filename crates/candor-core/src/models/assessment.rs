use serde::{Deserialize, Serialize};

use super::{OutcomeProbability, ScoreReport};

/// Overall estimate and sensitivity profile for one submission. The two are
/// only ever produced together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub probability: OutcomeProbability,
    pub report: ScoreReport,
}
