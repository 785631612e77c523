//! Opening a SQLite connection and applying pragmas.

use std::path::Path;

use rusqlite::Connection;

use candor_core::config::StorageConfig;
use candor_core::errors::{CandorResult, StorageError};

use crate::to_storage_err;

/// Connection options carried over from `StorageConfig`.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions {
    pub wal_mode: bool,
    pub busy_timeout_ms: u32,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self::from(&StorageConfig::default())
    }
}

impl From<&StorageConfig> for ConnectionOptions {
    fn from(config: &StorageConfig) -> Self {
        Self {
            wal_mode: config.wal_mode,
            busy_timeout_ms: config.busy_timeout_ms,
        }
    }
}

/// Open (creating if needed) the database file, including missing parent
/// directories.
pub fn open_file(path: &Path, options: ConnectionOptions) -> CandorResult<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::Io {
            path: parent.display().to_string(),
            message: e.to_string(),
        })?;
    }
    let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
    apply_pragmas(&conn, options)?;
    Ok(conn)
}

pub fn open_in_memory(options: ConnectionOptions) -> CandorResult<Connection> {
    let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
    apply_pragmas(&conn, options)?;
    Ok(conn)
}

/// Apply journal and busy-timeout pragmas to a connection.
pub fn apply_pragmas(conn: &Connection, options: ConnectionOptions) -> CandorResult<()> {
    let journal = if options.wal_mode { "WAL" } else { "DELETE" };
    conn.pragma_update_and_check(None, "journal_mode", journal, |_| Ok(()))
        .map_err(|e| to_storage_err(format!("journal_mode: {e}")))?;
    conn.execute_batch(&format!(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {};
        ",
        options.busy_timeout_ms
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Current journal mode, lower-cased.
pub fn journal_mode(conn: &Connection) -> CandorResult<String> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.to_lowercase())
}
