use candor_core::{CandidateRecord, IRecordStore, StoredRecord};
use candor_storage::RecordStore;
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = CandidateRecord> {
    prop::collection::btree_map("[a-z_]{1,12}", ".{0,40}", 0..8)
        .prop_map(|fields| fields.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn stored_fields_read_back_unchanged(records in prop::collection::vec(record_strategy(), 1..6)) {
        let store = RecordStore::open_in_memory().unwrap();
        let stored: Vec<StoredRecord> = records.into_iter().map(StoredRecord::new).collect();
        for record in &stored {
            store.append(record).unwrap();
        }

        let back = store.list().unwrap();
        prop_assert_eq!(back.len(), stored.len());
        for (a, b) in back.iter().zip(&stored) {
            prop_assert_eq!(&a.record, &b.record);
            prop_assert_eq!(&a.id, &b.id);
        }
    }
}
