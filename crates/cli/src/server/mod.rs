pub mod dns;

pub use dns::run_dns_server;
