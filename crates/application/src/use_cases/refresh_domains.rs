use crate::cache::CacheStore;
use crate::ports::AuthoritativeRepository;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument};
use uberdns_domain::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainRefreshSummary {
    pub loaded: usize,
    pub added: usize,
    pub removed: usize,
}

/// Reconciles the authoritative domain cache with the database.
pub struct RefreshAuthoritativeDomainsUseCase {
    repository: Arc<dyn AuthoritativeRepository>,
    cache: Arc<CacheStore>,
}

impl RefreshAuthoritativeDomainsUseCase {
    pub fn new(repository: Arc<dyn AuthoritativeRepository>, cache: Arc<CacheStore>) -> Self {
        Self { repository, cache }
    }

    /// New or renamed domains are inserted and domains gone from the
    /// database are removed, both through the domain writer.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<DomainRefreshSummary, DomainError> {
        let loaded = self.repository.load_domains().await?;
        let domains = &self.cache.authoritative_domains;
        let cached = domains.snapshot();

        let mut summary = DomainRefreshSummary {
            loaded: loaded.len(),
            ..Default::default()
        };

        let loaded_ids: HashSet<i64> = loaded.iter().map(|d| d.id).collect();
        for domain in loaded {
            if cached.get(&domain.id) != Some(&domain) {
                domains.insert(domain);
                summary.added += 1;
            }
        }
        for id in cached.keys().filter(|id| !loaded_ids.contains(id)) {
            domains.remove(*id);
            summary.removed += 1;
        }

        if summary.added > 0 || summary.removed > 0 {
            info!(
                loaded = summary.loaded,
                added = summary.added,
                removed = summary.removed,
                "Authoritative domains refreshed"
            );
        }

        Ok(summary)
    }
}
