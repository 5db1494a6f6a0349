//! uberdns domain layer
pub mod cache_control;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod zone;

pub use cache_control::{CacheCommand, CacheControlMessage};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{DnsQuery, QueryName};
pub use dns_record::{AnswerRecord, DnsRecord, RecordData, RecordType};
pub use errors::DomainError;
pub use zone::Domain;
