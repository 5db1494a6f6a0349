use crate::cache::CacheStore;
use std::sync::Arc;
use tracing::{info, instrument};
use uberdns_domain::{CacheCommand, CacheControlMessage, DomainError};

/// Applies one message from the invalidation bus to the authoritative caches.
pub struct ApplyCacheControlUseCase {
    cache: Arc<CacheStore>,
}

impl ApplyCacheControlUseCase {
    pub fn new(cache: Arc<CacheStore>) -> Self {
        Self { cache }
    }

    /// Decode `payload` and apply it. Record creates go through the same
    /// admission as a database fetch; record purges remove by ID. Domain
    /// messages are accepted and have no effect.
    #[instrument(skip_all)]
    pub fn execute(&self, payload: &str) -> Result<CacheCommand, DomainError> {
        let command = CacheControlMessage::decode(payload)?.into_command()?;
        let records = &self.cache.authoritative_records;

        match &command {
            CacheCommand::CreateRecord(record) => {
                let admitted = records.admit(record.clone());
                info!(record_id = record.id, name = %record.name, admitted, "Cache control: record create");
            }
            CacheCommand::PurgeRecord(record) => {
                records.purge(record.id);
                info!(record_id = record.id, name = %record.name, "Cache control: record purge");
            }
            CacheCommand::CreateDomain(domain) | CacheCommand::PurgeDomain(domain) => {
                info!(
                    action = command.as_str(),
                    domain_id = domain.id,
                    domain = %domain.name,
                    "Cache control: domain message ignored"
                );
            }
        }

        Ok(command)
    }
}
