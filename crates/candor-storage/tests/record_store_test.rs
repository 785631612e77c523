//! File-backed record store tests: lazy creation, append-only growth,
//! restart survival, migrations.

use chrono::{TimeZone, Utc};
use candor_core::config::StorageConfig;
use candor_core::{CandidateRecord, IRecordStore, StoredRecord};
use candor_storage::connection::{self, ConnectionOptions};
use candor_storage::migrations;
use candor_storage::RecordStore;

fn candidate(english: &str) -> CandidateRecord {
    CandidateRecord::new()
        .with("career_objective", "Data platform work")
        .with("sex", "Female")
        .with("english_level", english)
        .with("state", "Bahia")
}

#[test]
fn file_is_created_on_first_append_with_only_that_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("candidates.db");
    let store = RecordStore::at(&path);

    assert!(!path.exists());
    assert_eq!(store.count().unwrap(), 0);
    assert!(!path.exists(), "reading must not create the store");

    let stored = StoredRecord::new(candidate("Basic"));
    store.append(&stored).unwrap();

    assert!(path.exists());
    let all = store.list().unwrap();
    assert_eq!(all, vec![stored]);
}

#[test]
fn appends_accumulate_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::at(&dir.path().join("candidates.db"));

    for level in ["None", "Basic", "Fluent"] {
        store.append(&StoredRecord::new(candidate(level))).unwrap();
    }

    let levels: Vec<String> = store
        .list()
        .unwrap()
        .iter()
        .map(|r| r.record.get("english_level").unwrap().to_string())
        .collect();
    assert_eq!(levels, vec!["None", "Basic", "Fluent"]);
}

#[test]
fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("candidates.db");
    let submitted_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
    let stored = StoredRecord::at(candidate("Advanced"), submitted_at);

    {
        let store = RecordStore::at(&path);
        store.append(&stored).unwrap();
    }

    let reopened = RecordStore::at(&path);
    assert_eq!(reopened.count().unwrap(), 1);
    let back = &reopened.list().unwrap()[0];
    assert_eq!(back.id, stored.id);
    assert_eq!(back.submitted_at, submitted_at);
    assert_eq!(back.record.get("career_objective"), Some("Data platform work"));
}

#[test]
fn missing_parent_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("candidates.db");
    let store = RecordStore::at(&path);
    store.append(&StoredRecord::new(candidate("None"))).unwrap();
    assert!(path.exists());
}

#[test]
fn duplicate_id_is_rejected() {
    let store = RecordStore::open_in_memory().unwrap();
    let stored = StoredRecord::new(candidate("Basic"));
    store.append(&stored).unwrap();
    assert!(store.append(&stored).is_err());
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn from_config_uses_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("configured.db");
    let config = StorageConfig {
        db_path: path.display().to_string(),
        wal_mode: false,
        busy_timeout_ms: 1_000,
    };
    let store = RecordStore::from_config(&config);
    assert_eq!(store.path(), Some(path.as_path()));
    store.append(&StoredRecord::new(candidate("Fluent"))).unwrap();
    assert!(path.exists());
}

#[test]
fn wal_mode_is_applied_to_file_stores() {
    let dir = tempfile::tempdir().unwrap();
    let conn = connection::open_file(
        &dir.path().join("wal.db"),
        ConnectionOptions {
            wal_mode: true,
            busy_timeout_ms: 5_000,
        },
    )
    .unwrap();
    assert_eq!(connection::journal_mode(&conn).unwrap(), "wal");
}

#[test]
fn migrations_are_idempotent() {
    let conn = connection::open_in_memory(ConnectionOptions::default()).unwrap();
    migrations::run_migrations(&conn).unwrap();
    migrations::run_migrations(&conn).unwrap();
    assert_eq!(
        migrations::schema_version(&conn).unwrap(),
        migrations::LATEST_VERSION
    );
}

#[test]
fn in_memory_store_has_no_path() {
    let store = RecordStore::open_in_memory().unwrap();
    assert!(store.path().is_none());
    assert_eq!(store.count().unwrap(), 0);
}
