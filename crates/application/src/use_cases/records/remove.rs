use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use redis_dns_domain::{DomainError, Record};
use tracing::{debug, info};

use super::{associations_of, with_timeout};
use crate::ports::RecordStore;

pub struct RemoveRecordsUseCase {
    store: Arc<dyn RecordStore>,
    timeout: Duration,
}

impl RemoveRecordsUseCase {
    pub fn new(store: Arc<dyn RecordStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Retracts every association described by `records`.
    ///
    /// Absent associations are skipped silently. An alias is only removed
    /// while it still points at the target named in the record.
    pub async fn execute(&self, records: &[Record]) -> Result<usize, DomainError> {
        let associations = associations_of(records);
        info!(
            records = records.len(),
            associations = associations.len(),
            "Removing entries"
        );

        let writes = associations.iter().map(|association| {
            debug!(%association, "Removing association");
            with_timeout(self.timeout, self.store.retract(association))
        });
        try_join_all(writes).await?;

        info!(count = associations.len(), "Records removed");
        Ok(associations.len())
    }
}
