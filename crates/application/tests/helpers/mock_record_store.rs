#![allow(dead_code)]

use async_trait::async_trait;
use redis_dns_application::ports::RecordStore;
use redis_dns_domain::{chase, Answer, AssociationView, DomainError, Question, RecordType};
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBehavior {
    Normal,
    Unavailable,
    Stall,
    Panic,
}

#[derive(Default)]
struct State {
    sets: HashMap<(RecordType, String), BTreeSet<String>>,
    aliases: HashMap<String, String>,
}

impl AssociationView for State {
    fn members(&self, record_type: RecordType, owner: &str) -> Vec<String> {
        self.sets
            .get(&(record_type, owner.to_string()))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn alias(&self, owner: &str) -> Option<String> {
        self.aliases.get(owner).cloned()
    }
}

#[derive(Clone)]
pub struct MockRecordStore {
    state: Arc<RwLock<State>>,
    behavior: Arc<std::sync::RwLock<StoreBehavior>>,
    writes: Arc<AtomicUsize>,
    lookups: Arc<AtomicUsize>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(State::default())),
            behavior: Arc::new(std::sync::RwLock::new(StoreBehavior::Normal)),
            writes: Arc::new(AtomicUsize::new(0)),
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_behavior(&self, behavior: StoreBehavior) {
        *self.behavior.write().unwrap() = behavior;
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub async fn members(&self, record_type: RecordType, domain: &str) -> Vec<String> {
        self.state.read().await.members(record_type, domain)
    }

    pub async fn alias_of(&self, alias: &str) -> Option<String> {
        self.state.read().await.alias(alias)
    }

    pub async fn set_count(&self) -> usize {
        self.state.read().await.sets.len()
    }

    async fn gate(&self) -> Result<(), DomainError> {
        let behavior = *self.behavior.read().unwrap();
        match behavior {
            StoreBehavior::Normal => Ok(()),
            StoreBehavior::Unavailable => Err(DomainError::StoreUnavailable(
                "connection refused".to_string(),
            )),
            StoreBehavior::Stall => std::future::pending().await,
            StoreBehavior::Panic => panic!("mock store panic"),
        }
    }
}

impl Default for MockRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn add(
        &self,
        record_type: RecordType,
        domain: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        self.gate().await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.state
            .write()
            .await
            .sets
            .entry((record_type, domain.to_string()))
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
        self.gate().await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.write().await;
        let key = (record_type, domain.to_string());
        if let Some(set) = state.sets.get_mut(&key) {
            set.remove(value);
            if set.is_empty() {
                state.sets.remove(&key);
            }
        }
        Ok(())
    }

    async fn set_alias(&self, alias: &str, target: &str) -> Result<(), DomainError> {
        self.gate().await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.state
            .write()
            .await
            .aliases
            .insert(alias.to_string(), target.to_string());
        Ok(())
    }

    async fn remove_alias(&self, alias: &str, target: &str) -> Result<(), DomainError> {
        self.gate().await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.write().await;
        if state.aliases.get(alias).map(String::as_str) == Some(target) {
            state.aliases.remove(alias);
        }
        Ok(())
    }

    async fn lookup(
        &self,
        question: &Question,
        max_depth: usize,
    ) -> Result<Vec<Answer>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.gate().await?;
        let state = self.state.read().await;
        Ok(chase(&*state, question, max_depth))
    }
}
