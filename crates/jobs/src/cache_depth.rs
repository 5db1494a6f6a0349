use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uberdns_application::cache::CacheStore;
use uberdns_application::ports::ResolutionMetrics;

/// Publishes the entry count of every cache as gauges.
pub struct CacheDepthJob {
    cache: Arc<CacheStore>,
    metrics: Arc<dyn ResolutionMetrics>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheDepthJob {
    pub fn new(cache: Arc<CacheStore>, metrics: Arc<dyn ResolutionMetrics>) -> Self {
        Self {
            cache,
            metrics,
            interval_secs: 1,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn publish(&self) {
        for depth in self.cache.depths() {
            self.metrics
                .set_cache_depth(depth.family.label(), depth.records, depth.domains);
            debug!(
                family = %depth.family,
                records = depth.records,
                domains = depth.domains,
                "Cache depth"
            );
        }
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting cache depth job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheDepthJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => self.publish(),
                }
            }
        });
    }
}
