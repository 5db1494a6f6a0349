use crate::{BusHealthJob, CacheDepthJob, DomainRefreshJob};
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_cache_depth(CacheDepthJob::new(cache, metrics))
///     .with_bus_health(BusHealthJob::new(bus))
///     .start()
///     .await;
/// ```
#[derive(Default)]
pub struct JobRunner {
    cache_depth: Option<CacheDepthJob>,
    bus_health: Option<BusHealthJob>,
    domain_refresh: Option<DomainRefreshJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache_depth(mut self, job: CacheDepthJob) -> Self {
        self.cache_depth = Some(job);
        self
    }

    pub fn with_bus_health(mut self, job: BusHealthJob) -> Self {
        self.bus_health = Some(job);
        self
    }

    pub fn with_domain_refresh(mut self, job: DomainRefreshJob) -> Self {
        self.domain_refresh = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.cache_depth {
            Arc::new(job).start().await;
        }

        if let Some(job) = self.bus_health {
            Arc::new(job).start().await;
        }

        if let Some(job) = self.domain_refresh {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}
