pub mod add;
pub mod remove;

pub use add::AddRecordsUseCase;
pub use remove::RemoveRecordsUseCase;

use redis_dns_domain::{Association, DomainError, Record};
use std::future::Future;
use std::time::Duration;

fn associations_of(records: &[Record]) -> Vec<Association> {
    records.iter().flat_map(Record::associations).collect()
}

async fn with_timeout<F>(timeout: Duration, write: F) -> Result<(), DomainError>
where
    F: Future<Output = Result<(), DomainError>>,
{
    tokio::time::timeout(timeout, write)
        .await
        .map_err(|_| DomainError::StoreTimeout)?
}
