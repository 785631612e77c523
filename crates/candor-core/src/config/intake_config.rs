use serde::{Deserialize, Serialize};

use super::AttributeConfig;

/// Free-text question on the intake form. Stored verbatim, never scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeTextFieldConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// Intake form fields beyond the scored vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    pub free_text: Vec<FreeTextFieldConfig>,
    /// Constrained selections that are stored but not part of the radar.
    pub selections: Vec<AttributeConfig>,
}
