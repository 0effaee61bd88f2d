use async_trait::async_trait;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::RecordType as HickoryRecordType;
use redis_dns_application::ports::RecordStore;
use redis_dns_domain::{Answer, DomainError, Question, RecordType};
use redis_dns_infrastructure::store::InMemoryRecordStore;
use std::sync::Arc;

mod helpers;
use helpers::{query_udp, seed, TestServer};

/// Store whose every operation fails as if Redis were down.
struct UnreachableStore;

#[async_trait]
impl RecordStore for UnreachableStore {
    async fn add(&self, _: RecordType, _: &str, _: &str) -> Result<(), DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".to_string()))
    }

    async fn remove(&self, _: RecordType, _: &str, _: &str) -> Result<(), DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".to_string()))
    }

    async fn set_alias(&self, _: &str, _: &str) -> Result<(), DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".to_string()))
    }

    async fn remove_alias(&self, _: &str, _: &str) -> Result<(), DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".to_string()))
    }

    async fn lookup(&self, _: &Question, _: usize) -> Result<Vec<Answer>, DomainError> {
        Err(DomainError::StoreUnavailable("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_udp_query_with_cname_chase() {
    let store = Arc::new(InMemoryRecordStore::new());
    seed(
        &*store,
        "A example.com 1.2.3.4 1.2.3.5 CNAME example.com www.example.com",
    )
    .await;
    let server = TestServer::start(store).await;

    let response = query_udp(server.addr, "www.example.com.", HickoryRecordType::A).await;

    assert_eq!(response.id(), 4242);
    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert!(response.authoritative());
    let types: Vec<_> = response.answers().iter().map(|r| r.record_type()).collect();
    assert_eq!(
        types,
        vec![
            HickoryRecordType::CNAME,
            HickoryRecordType::A,
            HickoryRecordType::A
        ]
    );
    assert!(response.answers().iter().all(|r| r.ttl() == 0));
}

#[tokio::test]
async fn test_unknown_name_gets_empty_noerror() {
    let store = Arc::new(InMemoryRecordStore::new());
    let server = TestServer::start(store).await;

    let response = query_udp(server.addr, "nosuch.example.com.", HickoryRecordType::A).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert!(response.answers().is_empty());
}

#[tokio::test]
async fn test_unserved_type_gets_empty_noerror() {
    let store = Arc::new(InMemoryRecordStore::new());
    seed(&*store, "A example.com 1.2.3.4").await;
    let server = TestServer::start(store).await;

    let response = query_udp(server.addr, "example.com.", HickoryRecordType::MX).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert!(response.answers().is_empty());
}

#[tokio::test]
async fn test_store_failure_still_answers() {
    let server = TestServer::start(Arc::new(UnreachableStore)).await;

    let response = query_udp(server.addr, "example.com.", HickoryRecordType::A).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert!(response.answers().is_empty());
}
