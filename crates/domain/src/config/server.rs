use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    /// Port of the metrics/debug HTTP endpoint
    #[serde(default = "default_web_port")]
    pub web_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_dns_port() -> u16 {
    53
}

fn default_web_port() -> u16 {
    9153
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            web_port: default_web_port(),
            bind_address: default_bind_address(),
        }
    }
}
