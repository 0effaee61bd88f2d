use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Record store error: {0}")]
    StoreError(String),

    #[error("Record store operation timed out")]
    StoreTimeout,
}
