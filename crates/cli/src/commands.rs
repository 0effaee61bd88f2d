use redis_dns_application::ports::RecordStore;
use redis_dns_application::use_cases::{AddRecordsUseCase, RemoveRecordsUseCase};
use redis_dns_domain::{parse_records, Config, Record};
use std::sync::Arc;
use tracing::{error, info, warn};

pub async fn add(
    store: Arc<dyn RecordStore>,
    config: &Config,
    tokens: &[String],
) -> anyhow::Result<()> {
    let records = parsed(tokens);
    if records.is_empty() {
        return Ok(());
    }

    let use_case = AddRecordsUseCase::new(store, config.store.timeout());
    match use_case.execute(&records).await {
        Ok(_) => Ok(()),
        Err(e) => {
            error!(error = %e, "Error adding records");
            Err(e.into())
        }
    }
}

pub async fn remove(
    store: Arc<dyn RecordStore>,
    config: &Config,
    tokens: &[String],
) -> anyhow::Result<()> {
    let records = parsed(tokens);
    if records.is_empty() {
        return Ok(());
    }

    let use_case = RemoveRecordsUseCase::new(store, config.store.timeout());
    match use_case.execute(&records).await {
        Ok(_) => Ok(()),
        Err(e) => {
            error!(error = %e, "Error removing records");
            Err(e.into())
        }
    }
}

fn parsed(tokens: &[String]) -> Vec<Record> {
    let records = parse_records(tokens);
    for record in &records {
        info!(%record, "Parsed record");
    }
    if records.is_empty() {
        warn!(arguments = tokens.len(), "No record type keyword in arguments, nothing to do");
    }
    records
}
