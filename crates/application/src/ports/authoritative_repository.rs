use async_trait::async_trait;
use uberdns_domain::{DnsRecord, Domain, DomainError};

/// Read access to the zones and host records this server is authoritative for.
#[async_trait]
pub trait AuthoritativeRepository: Send + Sync {
    /// Every authoritative domain.
    ///
    /// # Errors
    ///
    /// * `DomainError::DatabaseError` - If the store is unreachable or the query fails
    async fn load_domains(&self) -> Result<Vec<Domain>, DomainError>;

    /// The record named `name` under `domain_id`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(DnsRecord))` - If a row matches
    /// * `Ok(None)` - If no row matches; this is not an error
    /// * `Err(DomainError)` - If the lookup itself fails
    async fn find_record(
        &self,
        name: &str,
        domain_id: i64,
    ) -> Result<Option<DnsRecord>, DomainError>;
}
