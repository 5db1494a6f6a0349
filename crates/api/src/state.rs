use std::sync::Arc;
use uberdns_application::cache::CacheStore;
use uberdns_infrastructure::metrics::PrometheusMetrics;

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<CacheStore>,
    pub metrics: Arc<PrometheusMetrics>,
}
