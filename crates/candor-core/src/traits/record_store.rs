use crate::errors::CandorResult;
use crate::models::StoredRecord;

/// Append-only persistence of submitted candidate records.
pub trait IRecordStore: Send + Sync {
    /// Append one record. Creates the underlying store on first use.
    fn append(&self, record: &StoredRecord) -> CandorResult<()>;
}
