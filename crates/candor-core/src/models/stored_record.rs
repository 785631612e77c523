use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CandidateRecord;

/// A candidate record as persisted: stamped with its submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: String,
    pub submitted_at: DateTime<Utc>,
    pub record: CandidateRecord,
}

impl StoredRecord {
    /// Stamp a record with a fresh id and the current time.
    pub fn new(record: CandidateRecord) -> Self {
        Self::at(record, Utc::now())
    }

    pub fn at(record: CandidateRecord, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            submitted_at,
            record,
        }
    }
}
