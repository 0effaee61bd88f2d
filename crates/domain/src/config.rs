pub mod errors;
pub mod logging;
pub mod resolution;
pub mod root;
pub mod server;
pub mod store;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolution::ResolutionConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use store::StoreConfig;
