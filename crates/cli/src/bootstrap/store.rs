use redis_dns_application::ports::RecordStore;
use redis_dns_domain::config::StoreConfig;
use redis_dns_domain::DomainError;
use redis_dns_infrastructure::store::{InMemoryRecordStore, RedisRecordStore};
use std::sync::Arc;
use tracing::{error, info, warn};

pub async fn connect_store(
    config: &StoreConfig,
    in_memory: bool,
) -> anyhow::Result<Arc<dyn RecordStore>> {
    if in_memory {
        warn!("Using in-memory record store, records are lost on exit");
        return Ok(Arc::new(InMemoryRecordStore::new()));
    }

    info!(url = %config.url, "Connecting to record store");

    let store = tokio::time::timeout(config.timeout(), RedisRecordStore::connect(&config.url))
        .await
        .map_err(|_| DomainError::StoreTimeout)
        .and_then(|result| result)
        .map_err(|e| {
            error!(error = %e, "Failure connecting to redis");
            e
        })?;

    Ok(Arc::new(store))
}
