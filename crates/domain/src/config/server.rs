use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,

    /// 0 disables the UDP listener.
    pub udp_port: u16,

    /// 0 disables the TCP listener.
    pub tcp_port: u16,

    /// Idle timeout for TCP connections.
    pub tcp_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            udp_port: 53,
            tcp_port: 53,
            tcp_timeout_secs: 10,
        }
    }
}
