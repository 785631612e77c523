//! Versioned schema migrations tracked through `PRAGMA user_version`.

mod v001_candidate_records;

use rusqlite::Connection;

use candor_core::errors::{CandorResult, StorageError};

/// Latest schema version.
pub const LATEST_VERSION: u32 = 1;

/// Apply every migration newer than the database's `user_version`.
pub fn run_migrations(conn: &Connection) -> CandorResult<()> {
    let current_version: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::MigrationFailed {
            version: 0,
            reason: e.to_string(),
        })?;

    let migrations: &[(&str, u32)] = &[(v001_candidate_records::MIGRATION_SQL, 1)];

    for (sql, version) in migrations {
        if current_version < *version {
            conn.execute_batch(sql)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            tracing::debug!(version, "migration applied");
        }
    }
    Ok(())
}

/// Schema version recorded in the database.
pub fn schema_version(conn: &Connection) -> CandorResult<u32> {
    let version = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::MigrationFailed {
            version: 0,
            reason: e.to_string(),
        })?;
    Ok(version)
}
