use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uberdns_application::ports::InvalidationBus;

/// Pings the invalidation bus so that a dead connection shows up in the logs.
pub struct BusHealthJob {
    bus: Arc<dyn InvalidationBus>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl BusHealthJob {
    pub fn new(bus: Arc<dyn InvalidationBus>) -> Self {
        Self {
            bus,
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

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting bus health job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            let mut healthy = true;
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("BusHealthJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.bus.ping().await {
                            Ok(()) => {
                                if !healthy {
                                    info!("Invalidation bus reachable again");
                                }
                                healthy = true;
                            }
                            Err(e) => {
                                warn!(error = %e, "Invalidation bus ping failed");
                                healthy = false;
                            }
                        }
                    }
                }
            }
        });
    }
}
