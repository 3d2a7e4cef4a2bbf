use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub dns_port: u16,

    pub web_port: u16,

    pub bind_address: String,

    /// Also serve DNS over TCP on `dns_port`.
    pub tcp_enabled: bool,

    /// Serve the management API on `web_port`.
    pub api_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: 53,
            web_port: 8080,
            bind_address: "0.0.0.0".to_string(),
            tcp_enabled: false,
            api_enabled: true,
        }
    }
}
