//! Insert, count, and list for candidate records.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use candor_core::errors::{CandorResult, StorageError};
use candor_core::{CandidateRecord, StoredRecord};

use crate::to_storage_err;

/// Insert one stored record.
pub fn insert_record(conn: &Connection, record: &StoredRecord) -> CandorResult<()> {
    let fields = serde_json::to_string(&record.record).map_err(|e| StorageError::Serialization {
        message: e.to_string(),
    })?;
    conn.execute(
        "INSERT INTO candidate_records (id, submitted_at, fields) VALUES (?1, ?2, ?3)",
        params![record.id, record.submitted_at.to_rfc3339(), fields],
    )
    .map_err(|e| to_storage_err(format!("insert_record: {e}")))?;
    Ok(())
}

pub fn count_records(conn: &Connection) -> CandorResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM candidate_records", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// All records in insertion order.
pub fn list_records(conn: &Connection) -> CandorResult<Vec<StoredRecord>> {
    let mut stmt = conn
        .prepare("SELECT id, submitted_at, fields FROM candidate_records ORDER BY rowid")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        let (id, submitted_at, fields) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let submitted_at = DateTime::parse_from_rfc3339(&submitted_at)
            .map_err(|e| StorageError::Serialization {
                message: format!("submitted_at {submitted_at:?}: {e}"),
            })?
            .with_timezone(&Utc);
        let record: CandidateRecord =
            serde_json::from_str(&fields).map_err(|e| StorageError::Serialization {
                message: e.to_string(),
            })?;
        records.push(StoredRecord {
            id,
            submitted_at,
            record,
        });
    }
    Ok(records)
}
