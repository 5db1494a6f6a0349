use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query timeout after {0}ms")]
    QueryTimeout(u64),

    #[error("Upstream {server} failed: {reason}")]
    UpstreamFailed { server: String, reason: String },

    #[error("No upstream servers configured")]
    NoUpstreamServers,

    #[error("Invalid cache control message: {0}")]
    InvalidCacheControl(String),

    #[error("Invalidation bus error: {0}")]
    InvalidationBus(String),
}
