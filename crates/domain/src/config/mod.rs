//! Configuration module for uberdns
//!
//! - `root`: main configuration and CLI overrides
//! - `server`: listener ports and binding
//! - `dns`: upstream resolvers and resolution settings
//! - `database`: authoritative store connection
//! - `invalidation`: cache-control bus subscription
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod database;
pub mod dns;
pub mod errors;
pub mod invalidation;
pub mod logging;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use invalidation::InvalidationConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
