//! Redis-backed record store.
//!
//! Writes map one-to-one onto `SADD`/`SREM`/`SET`. Lookups run `lookup.lua`
//! server-side so the direct read and the alias chase happen inside one
//! script execution, which Redis never interleaves with other commands.

use super::keys::{alias_key, set_key};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, RedisError, Script};
use redis_dns_application::ports::RecordStore;
use redis_dns_domain::resolution::stored_answer;
use redis_dns_domain::{Answer, DomainError, Question, RecordType};
use std::sync::Arc;
use tracing::{debug, info};

const LOOKUP_SCRIPT: &str = include_str!("lookup.lua");
const REMOVE_ALIAS_SCRIPT: &str = include_str!("remove_alias.lua");

/// Cheap to clone; clones share one multiplexed connection.
#[derive(Clone)]
pub struct RedisRecordStore {
    connection: ConnectionManager,
    lookup_script: Arc<Script>,
    remove_alias_script: Arc<Script>,
}

impl RedisRecordStore {
    /// Connects to `url` and fails if the server cannot be reached.
    pub async fn connect(url: &str) -> Result<Self, DomainError> {
        let client = redis::Client::open(url).map_err(store_error)?;
        let connection = client
            .get_connection_manager()
            .await
            .map_err(store_error)?;

        info!(url = %url, "Connected to record store");

        Ok(Self {
            connection,
            lookup_script: Arc::new(Script::new(LOOKUP_SCRIPT)),
            remove_alias_script: Arc::new(Script::new(REMOVE_ALIAS_SCRIPT)),
        })
    }

    fn connection(&self) -> ConnectionManager {
        self.connection.clone()
    }
}

#[async_trait]
impl RecordStore for RedisRecordStore {
    async fn add(
        &self,
        record_type: RecordType,
        domain: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        let mut conn = self.connection();
        conn.sadd::<_, _, ()>(set_key(record_type, domain), value)
            .await
            .map_err(store_error)
    }

    async fn remove(
        &self,
        record_type: RecordType,
        domain: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        let mut conn = self.connection();
        conn.srem::<_, _, ()>(set_key(record_type, domain), value)
            .await
            .map_err(store_error)
    }

    async fn set_alias(&self, alias: &str, target: &str) -> Result<(), DomainError> {
        let mut conn = self.connection();
        conn.set::<_, _, ()>(alias_key(alias), target)
            .await
            .map_err(store_error)
    }

    async fn remove_alias(&self, alias: &str, target: &str) -> Result<(), DomainError> {
        let mut conn = self.connection();
        let removed: i64 = self
            .remove_alias_script
            .key(alias_key(alias))
            .arg(target)
            .invoke_async(&mut conn)
            .await
            .map_err(store_error)?;

        if removed == 0 {
            debug!(alias = %alias, target = %target, "Alias absent or points elsewhere");
        }
        Ok(())
    }

    async fn lookup(
        &self,
        question: &Question,
        max_depth: usize,
    ) -> Result<Vec<Answer>, DomainError> {
        let mut conn = self.connection();
        let rows: Vec<(String, String, String)> = self
            .lookup_script
            .key(set_key(question.record_type, &question.name))
            .key(alias_key(&question.name))
            .arg(question.record_type.as_str())
            .arg(question.name.as_ref())
            .arg(max_depth)
            .invoke_async(&mut conn)
            .await
            .map_err(store_error)?;

        Ok(rows
            .iter()
            .filter_map(|(record_type, owner, value)| {
                let answer = record_type
                    .parse::<RecordType>()
                    .ok()
                    .and_then(|rt| stored_answer(rt, owner, value));
                if answer.is_none() {
                    debug!(record_type = %record_type, owner = %owner, value = %value, "Skipping unusable stored value");
                }
                answer
            })
            .collect())
    }
}

fn store_error(e: RedisError) -> DomainError {
    if e.is_io_error() || e.is_connection_refusal() || e.is_connection_dropped() || e.is_timeout()
    {
        DomainError::StoreUnavailable(e.to_string())
    } else {
        DomainError::StoreError(e.to_string())
    }
}
