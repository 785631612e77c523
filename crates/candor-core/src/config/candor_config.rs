//! Top-level Candor configuration.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassifierConfig, IntakeConfig, ObservabilityConfig, StorageConfig, VocabularyConfig};
use crate::constants::{DB_PATH_ENV_VAR, LOG_ENV_VAR};
use crate::errors::ConfigError;
use crate::models::DomainVocabulary;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CANDOR_DB_PATH`, `CANDOR_LOG`)
/// 2. Config file (`candor.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandorConfig {
    pub vocabulary: VocabularyConfig,
    pub intake: IntakeConfig,
    pub classifier: ClassifierConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl CandorConfig {
    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML string. No environment overrides.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vocabulary.validate()?;

        let mut ids: HashSet<&str> = self
            .vocabulary
            .attributes
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        for selection in &self.intake.selections {
            selection.validate("intake.selections")?;
            if !ids.insert(selection.id.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("intake.selections.{}", selection.id),
                    message: "field declared more than once".to_string(),
                });
            }
        }
        for field in &self.intake.free_text {
            if !ids.insert(field.id.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("intake.free_text.{}", field.id),
                    message: "field declared more than once".to_string(),
                });
            }
        }

        if self.classifier.model_path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "classifier.model_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.storage.db_path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "storage.db_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The scored vocabulary as a read-only registry.
    pub fn domain_vocabulary(&self) -> DomainVocabulary {
        self.vocabulary.to_vocabulary()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
            if !path.is_empty() {
                self.storage.db_path = path;
            }
        }
        if let Ok(filter) = std::env::var(LOG_ENV_VAR) {
            if !filter.is_empty() {
                self.observability.log_filter = filter;
            }
        }
    }
}
