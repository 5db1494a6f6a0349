use serde::{Deserialize, Serialize};

/// Subscription to the cache-control channel
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InvalidationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Redis URL, e.g. "redis://:password@127.0.0.1:6379/0"
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_channel")]
    pub channel: String,

    /// Delay before resubscribing after the subscription drops
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
}

impl Default for InvalidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: default_url(),
            channel: default_channel(),
            reconnect_delay_ms: default_reconnect_delay_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_url() -> String {
    "redis://127.0.0.1:6379/0".to_string()
}

fn default_channel() -> String {
    "uberdns-cache".to_string()
}

fn default_reconnect_delay_ms() -> u64 {
    1000
}
