mod test_server;

#[allow(unused_imports)]
pub use test_server::{query_udp, seed, TestServer};
