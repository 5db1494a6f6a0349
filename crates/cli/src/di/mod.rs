use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;
use uberdns_api::AppState;
use uberdns_application::cache::CacheStore;
use uberdns_application::ports::AuthoritativeRepository;
use uberdns_application::use_cases::{
    ApplyCacheControlUseCase, RefreshAuthoritativeDomainsUseCase, ResolveQueryUseCase,
};
use uberdns_domain::Config;
use uberdns_infrastructure::dns::{DnsServerHandler, FailoverUpstreamResolver};
use uberdns_infrastructure::invalidation::{CacheInvalidationSubscriber, RedisInvalidationBus};
use uberdns_infrastructure::metrics::PrometheusMetrics;
use uberdns_infrastructure::repositories::SqliteAuthoritativeRepository;
use uberdns_jobs::{BusHealthJob, CacheDepthJob, DomainRefreshJob, JobRunner};

/// Everything the servers and background tasks share.
pub struct Services {
    pub cache: Arc<CacheStore>,
    pub metrics: Arc<PrometheusMetrics>,
    pub resolve_query: Arc<ResolveQueryUseCase>,
    pub refresh_domains: Arc<RefreshAuthoritativeDomainsUseCase>,
    pub apply_cache_control: Arc<ApplyCacheControlUseCase>,
}

impl Services {
    /// Loads the authoritative domains and wires the caches, the upstream
    /// resolver and the use cases. A database failure here is fatal.
    pub async fn build(config: &Config, pool: sqlx::SqlitePool) -> anyhow::Result<Self> {
        let repository: Arc<dyn AuthoritativeRepository> =
            Arc::new(SqliteAuthoritativeRepository::new(pool));

        let domains = repository.load_domains().await?;
        info!(count = domains.len(), "Authoritative domains loaded");
        let cache = Arc::new(CacheStore::spawn(domains));

        let metrics = Arc::new(PrometheusMetrics::new()?);

        let upstream = Arc::new(FailoverUpstreamResolver::new(
            config.dns.upstream_addrs()?,
            Duration::from_millis(config.dns.query_timeout),
            metrics.clone(),
        )?);
        info!(
            servers = ?upstream.servers(),
            timeout_ms = config.dns.query_timeout,
            "Upstream resolvers configured"
        );

        let resolve_query = Arc::new(ResolveQueryUseCase::new(
            cache.clone(),
            repository.clone(),
            upstream,
            metrics.clone(),
        ));
        let refresh_domains = Arc::new(RefreshAuthoritativeDomainsUseCase::new(
            repository,
            cache.clone(),
        ));
        let apply_cache_control = Arc::new(ApplyCacheControlUseCase::new(cache.clone()));

        Ok(Self {
            cache,
            metrics,
            resolve_query,
            refresh_domains,
            apply_cache_control,
        })
    }

    pub fn dns_handler(&self) -> DnsServerHandler {
        DnsServerHandler::new(self.resolve_query.clone())
    }

    pub fn api_state(&self) -> AppState {
        AppState {
            cache: self.cache.clone(),
            metrics: self.metrics.clone(),
        }
    }

    /// Starts the invalidation subscriber and the jobs. All of them stop when
    /// `shutdown` is cancelled.
    pub async fn start_background(
        &self,
        config: &Config,
        shutdown: CancellationToken,
    ) -> anyhow::Result<()> {
        let mut runner = JobRunner::new().with_cache_depth(
            CacheDepthJob::new(self.cache.clone(), self.metrics.clone())
                .with_cancellation(shutdown.clone()),
        );

        let refresh_secs = config.dns.domain_refresh_interval_secs;
        if refresh_secs > 0 {
            runner = runner.with_domain_refresh(
                DomainRefreshJob::new(self.refresh_domains.clone(), refresh_secs)
                    .with_cancellation(shutdown.clone()),
            );
        }

        let invalidation = &config.invalidation;
        if invalidation.enabled {
            let bus = Arc::new(RedisInvalidationBus::new(&invalidation.url)?);

            CacheInvalidationSubscriber::new(
                bus.client().clone(),
                invalidation.channel.clone(),
                self.apply_cache_control.clone(),
            )
            .with_reconnect_delay(Duration::from_millis(invalidation.reconnect_delay_ms))
            .with_cancellation(shutdown.clone())
            .start()
            .await;

            runner = runner.with_bus_health(BusHealthJob::new(bus).with_cancellation(shutdown));
        } else {
            info!("Cache invalidation disabled");
        }

        runner.start().await;
        Ok(())
    }
}
