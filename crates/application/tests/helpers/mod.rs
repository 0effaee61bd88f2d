mod mock_record_store;

pub use mock_record_store::{MockRecordStore, StoreBehavior};
