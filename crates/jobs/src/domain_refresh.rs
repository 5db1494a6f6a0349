use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use uberdns_application::use_cases::RefreshAuthoritativeDomainsUseCase;

pub struct DomainRefreshJob {
    refresh: Arc<RefreshAuthoritativeDomainsUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl DomainRefreshJob {
    pub fn new(refresh: Arc<RefreshAuthoritativeDomainsUseCase>, interval_secs: u64) -> Self {
        Self {
            refresh,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting authoritative domain refresh job"
        );

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs);
            // Domains are loaded at startup, so the first refresh waits a period.
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("DomainRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = self.refresh.execute().await {
                            error!(error = %e, "Authoritative domain refresh failed");
                        }
                    }
                }
            }
        });
    }
}
