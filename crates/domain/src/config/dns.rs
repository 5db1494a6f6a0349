use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

const DEFAULT_DNS_PORT: u16 = 53;

/// DNS resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream resolvers, queried in order. Each entry is an IP address with
    /// an optional port ("1.1.1.1", "9.9.9.9:5353", "[2606:4700::1111]:53").
    #[serde(default = "default_upstream_servers")]
    pub upstream_servers: Vec<String>,

    /// Per-attempt upstream timeout in milliseconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Reload authoritative domains from the database every N seconds.
    /// 0 disables the refresh; domains are then loaded once at startup.
    #[serde(default)]
    pub domain_refresh_interval_secs: u64,
}

impl DnsConfig {
    /// Parse `upstream_servers` into socket addresses, defaulting to port 53.
    pub fn upstream_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.upstream_servers
            .iter()
            .map(|server| parse_upstream(server))
            .collect()
    }
}

fn parse_upstream(server: &str) -> Result<SocketAddr, ConfigError> {
    let trimmed = server.trim();
    if let Ok(addr) = trimmed.parse::<SocketAddr>() {
        return Ok(addr);
    }
    let bare = trimmed.trim_start_matches('[').trim_end_matches(']');
    bare.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| ConfigError::Validation(format!("Invalid upstream server '{}'", server)))
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream_servers: default_upstream_servers(),
            query_timeout: default_query_timeout(),
            domain_refresh_interval_secs: 0,
        }
    }
}

fn default_upstream_servers() -> Vec<String> {
    vec!["1.1.1.1".to_string(), "8.8.8.8".to_string()]
}

fn default_query_timeout() -> u64 {
    2000
}
