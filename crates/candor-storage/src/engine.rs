//! RecordStore — owns the SQLite connection and implements IRecordStore.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use candor_core::config::StorageConfig;
use candor_core::errors::CandorResult;
use candor_core::{IRecordStore, StoredRecord};

use crate::connection::{self, ConnectionOptions};
use crate::migrations;
use crate::queries::record_ops;
use crate::to_storage_err;

enum Location {
    File(PathBuf),
    Memory,
}

/// Append-only store of submitted records.
///
/// File-backed stores open lazily: the database file does not exist until the
/// first record is appended, at which point it is created holding only that
/// record.
pub struct RecordStore {
    location: Location,
    options: ConnectionOptions,
    conn: Mutex<Option<Connection>>,
}

impl RecordStore {
    /// Store backed by a file. Nothing touches the disk until the first append.
    pub fn at(path: &Path) -> Self {
        Self::with_options(path, ConnectionOptions::default())
    }

    pub fn with_options(path: &Path, options: ConnectionOptions) -> Self {
        Self {
            location: Location::File(path.to_path_buf()),
            options,
            conn: Mutex::new(None),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::with_options(Path::new(&config.db_path), ConnectionOptions::from(config))
    }

    /// In-memory store (for testing).
    pub fn open_in_memory() -> CandorResult<Self> {
        let options = ConnectionOptions::default();
        let conn = connection::open_in_memory(options)?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            location: Location::Memory,
            options,
            conn: Mutex::new(Some(conn)),
        })
    }

    /// Path of the backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            Location::File(path) => Some(path),
            Location::Memory => None,
        }
    }

    /// Number of stored records. A file store that was never written holds 0.
    pub fn count(&self) -> CandorResult<usize> {
        self.with_existing(record_ops::count_records, 0)
    }

    /// Every stored record in append order.
    pub fn list(&self) -> CandorResult<Vec<StoredRecord>> {
        self.with_existing(record_ops::list_records, Vec::new())
    }

    fn lock(&self) -> CandorResult<MutexGuard<'_, Option<Connection>>> {
        self.conn
            .lock()
            .map_err(|_| to_storage_err("record store lock poisoned"))
    }

    /// Run `f` on the connection, opening and migrating the database first
    /// if needed.
    fn with_conn<F, T>(&self, f: F) -> CandorResult<T>
    where
        F: FnOnce(&Connection) -> CandorResult<T>,
    {
        let mut guard = self.lock()?;
        if guard.is_none() {
            let conn = match &self.location {
                Location::File(path) => {
                    let created = !path.exists();
                    let conn = connection::open_file(path, self.options)?;
                    if created {
                        tracing::info!(path = %path.display(), "record store created");
                    }
                    conn
                }
                Location::Memory => connection::open_in_memory(self.options)?,
            };
            migrations::run_migrations(&conn)?;
            *guard = Some(conn);
        }
        match guard.as_ref() {
            Some(conn) => f(conn),
            None => Err(to_storage_err("record store connection unavailable")),
        }
    }

    /// Like `with_conn`, but a file store that has never been created yields
    /// `empty` instead of creating the file.
    fn with_existing<F, T>(&self, f: F, empty: T) -> CandorResult<T>
    where
        F: FnOnce(&Connection) -> CandorResult<T>,
    {
        if let Location::File(path) = &self.location {
            if !path.exists() && self.lock()?.is_none() {
                return Ok(empty);
            }
        }
        self.with_conn(f)
    }
}

impl IRecordStore for RecordStore {
    fn append(&self, record: &StoredRecord) -> CandorResult<()> {
        self.with_conn(|conn| record_ops::insert_record(conn, record))?;
        tracing::debug!(record_id = %record.id, "record appended");
        Ok(())
    }
}
