pub mod keys;
pub mod memory_store;
pub mod redis_store;

pub use memory_store::InMemoryRecordStore;
pub use redis_store::RedisRecordStore;
