use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use redis_dns_domain::{DomainError, Record};
use tracing::{debug, info};

use super::{associations_of, with_timeout};
use crate::ports::RecordStore;

pub struct AddRecordsUseCase {
    store: Arc<dyn RecordStore>,
    timeout: Duration,
}

impl AddRecordsUseCase {
    pub fn new(store: Arc<dyn RecordStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Writes every association described by `records`.
    ///
    /// Writes are issued concurrently; the first failure aborts the batch.
    /// Returns the number of associations written.
    pub async fn execute(&self, records: &[Record]) -> Result<usize, DomainError> {
        let associations = associations_of(records);
        info!(
            records = records.len(),
            associations = associations.len(),
            "Adding entries"
        );

        let writes = associations.iter().map(|association| {
            debug!(%association, "Adding association");
            with_timeout(self.timeout, self.store.apply(association))
        });
        try_join_all(writes).await?;

        info!(count = associations.len(), "Records added");
        Ok(associations.len())
    }
}
