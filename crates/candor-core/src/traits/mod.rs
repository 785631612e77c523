mod classifier;
mod record_store;

pub use classifier::IClassifier;
pub use record_store::IRecordStore;
