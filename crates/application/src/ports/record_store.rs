use async_trait::async_trait;
use redis_dns_domain::{Answer, Association, DomainError, Question, RecordType};

/// Contract over the external key-value store holding the records.
///
/// Writes are set-membership operations and therefore idempotent: adding a
/// present value or removing an absent one succeeds without effect.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn add(&self, record_type: RecordType, domain: &str, value: &str)
        -> Result<(), DomainError>;

    async fn remove(
        &self,
        record_type: RecordType,
        domain: &str,
        value: &str,
    ) -> Result<(), DomainError>;

    /// Points `alias` at `target`, replacing any previous target.
    async fn set_alias(&self, alias: &str, target: &str) -> Result<(), DomainError>;

    /// Deletes `alias` only while it still points at `target`.
    async fn remove_alias(&self, alias: &str, target: &str) -> Result<(), DomainError>;

    /// Resolves `question` in one atomic read, following at most `max_depth`
    /// aliases.
    async fn lookup(&self, question: &Question, max_depth: usize)
        -> Result<Vec<Answer>, DomainError>;

    async fn apply(&self, association: &Association) -> Result<(), DomainError> {
        match association {
            Association::Member {
                record_type,
                domain,
                value,
            } => self.add(*record_type, domain, value).await,
            Association::Alias { alias, target } => self.set_alias(alias, target).await,
        }
    }

    async fn retract(&self, association: &Association) -> Result<(), DomainError> {
        match association {
            Association::Member {
                record_type,
                domain,
                value,
            } => self.remove(*record_type, domain, value).await,
            Association::Alias { alias, target } => self.remove_alias(alias, target).await,
        }
    }
}
