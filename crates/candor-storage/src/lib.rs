//! # candor-storage
//!
//! Append-only persistence of submitted candidate records in SQLite.
//! The database file is created on the first append; nothing is read back
//! by the scoring path.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;

pub use engine::RecordStore;

use candor_core::errors::{CandorError, StorageError};

/// Wrap a message as a storage-layer error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> CandorError {
    CandorError::Storage(StorageError::SqliteError {
        message: message.into(),
    })
}
