pub mod classifier_config;
pub mod defaults;
pub mod intake_config;
pub mod observability_config;
pub mod storage_config;
pub mod vocabulary_config;

mod candor_config;

pub use candor_config::CandorConfig;
pub use classifier_config::ClassifierConfig;
pub use intake_config::{FreeTextFieldConfig, IntakeConfig};
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;
pub use vocabulary_config::{AttributeConfig, VocabularyConfig};
