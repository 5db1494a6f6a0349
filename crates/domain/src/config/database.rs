use serde::{Deserialize, Serialize};

/// Connection to the authoritative store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL (default: "sqlite://uberdns.db")
    #[serde(default = "default_db_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Apply bundled schema migrations at startup (default: false, the schema
    /// normally belongs to the management API)
    #[serde(default)]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
            max_connections: default_max_connections(),
            run_migrations: false,
        }
    }
}

fn default_db_url() -> String {
    "sqlite://uberdns.db".to_string()
}

fn default_max_connections() -> u32 {
    8
}
