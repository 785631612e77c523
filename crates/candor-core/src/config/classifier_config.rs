use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the scoring model comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// JSON weight table for the logistic classifier.
    pub model_path: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_path: defaults::DEFAULT_MODEL_PATH.to_string(),
        }
    }
}
