use super::error_code::{self, CandorErrorCode};

/// Record-store errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("record serialization failed: {message}")]
    Serialization { message: String },

    #[error("cannot prepare store location {path}: {message}")]
    Io { path: String, message: String },
}

impl CandorErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
