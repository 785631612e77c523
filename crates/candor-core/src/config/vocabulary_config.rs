use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::{Attribute, DomainVocabulary};

/// One categorical attribute as written in `candor.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeConfig {
    pub id: String,
    pub values: Vec<String>,
    /// Question shown on the intake form. Falls back to the humanized id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl AttributeConfig {
    /// Reject empty and duplicated value sets. `section` names the config
    /// table for error messages.
    pub fn validate(&self, section: &str) -> Result<(), ConfigError> {
        if self.id.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: format!("{section}.id"),
                message: "must not be empty".to_string(),
            });
        }
        if self.values.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: format!("{section}.{}", self.id),
                message: "must list at least one legal value".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for value in &self.values {
            if !seen.insert(value.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("{section}.{}", self.id),
                    message: format!("duplicate value {value:?}"),
                });
            }
        }
        Ok(())
    }

    pub fn to_attribute(&self) -> Attribute {
        Attribute::new(self.id.clone(), self.values.iter().cloned())
    }
}

/// The scored attributes, in the order they appear on the radar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub attributes: Vec<AttributeConfig>,
}

impl VocabularyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        for attribute in &self.attributes {
            attribute.validate("vocabulary.attributes")?;
            if !ids.insert(attribute.id.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("vocabulary.attributes.{}", attribute.id),
                    message: "attribute declared more than once".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn to_vocabulary(&self) -> DomainVocabulary {
        self.attributes
            .iter()
            .map(AttributeConfig::to_attribute)
            .collect()
    }

    pub fn prompt_for(&self, id: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.id == id)
            .and_then(|a| a.prompt.as_deref())
    }
}
