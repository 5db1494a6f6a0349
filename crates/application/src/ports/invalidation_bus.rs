use async_trait::async_trait;
use uberdns_domain::DomainError;

/// Liveness probe for the cache-invalidation transport.
#[async_trait]
pub trait InvalidationBus: Send + Sync {
    async fn ping(&self) -> Result<(), DomainError>;
}
