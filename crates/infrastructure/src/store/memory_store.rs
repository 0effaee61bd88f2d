use super::keys::{alias_key, set_key};
use async_trait::async_trait;
use redis_dns_application::ports::RecordStore;
use redis_dns_domain::{chase, Answer, AssociationView, DomainError, Question, RecordType};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Keyspace {
    sets: HashMap<String, BTreeSet<String>>,
    strings: HashMap<String, String>,
}

impl AssociationView for Keyspace {
    fn members(&self, record_type: RecordType, owner: &str) -> Vec<String> {
        self.sets
            .get(&set_key(record_type, owner))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn alias(&self, owner: &str) -> Option<String> {
        self.strings.get(&alias_key(owner)).cloned()
    }
}

/// Process-local record store using the same key layout as Redis.
///
/// A lookup holds the read lock for the whole chase, so writers are never
/// observed half-applied.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    keyspace: Arc<RwLock<Keyspace>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of non-empty value sets.
    pub async fn set_count(&self) -> usize {
        self.keyspace.read().await.sets.len()
    }

    pub async fn members(&self, record_type: RecordType, domain: &str) -> Vec<String> {
        self.keyspace.read().await.members(record_type, domain)
    }

    pub async fn alias_of(&self, alias: &str) -> Option<String> {
        self.keyspace.read().await.alias(alias)
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn add(
        &self,
        record_type: RecordType,
        domain: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.keyspace
            .write()
            .await
            .sets
            .entry(set_key(record_type, domain))
            .or_default()
            .insert(value.to_string());
        Ok(())
    }

    async fn remove(
        &self,
        record_type: RecordType,
        domain: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        let mut keyspace = self.keyspace.write().await;
        let key = set_key(record_type, domain);
        if let Some(set) = keyspace.sets.get_mut(&key) {
            set.remove(value);
            // Redis drops empty sets.
            if set.is_empty() {
                keyspace.sets.remove(&key);
            }
        }
        Ok(())
    }

    async fn set_alias(&self, alias: &str, target: &str) -> Result<(), DomainError> {
        self.keyspace
            .write()
            .await
            .strings
            .insert(alias_key(alias), target.to_string());
        Ok(())
    }

    async fn remove_alias(&self, alias: &str, target: &str) -> Result<(), DomainError> {
        let mut keyspace = self.keyspace.write().await;
        let key = alias_key(alias);
        if keyspace.strings.get(&key).map(String::as_str) == Some(target) {
            keyspace.strings.remove(&key);
        }
        Ok(())
    }

    async fn lookup(
        &self,
        question: &Question,
        max_depth: usize,
    ) -> Result<Vec<Answer>, DomainError> {
        let keyspace = self.keyspace.read().await;
        Ok(chase(&*keyspace, question, max_depth))
    }
}
