use prometheus::{Encoder, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder};
use uberdns_application::ports::ResolutionMetrics;
use uberdns_domain::RecordType;

/// Prometheus registry holding the resolver's counters and gauges.
pub struct PrometheusMetrics {
    registry: Registry,
    queries: IntCounterVec,
    record_depth: IntGaugeVec,
    domain_depth: IntGaugeVec,
}

impl PrometheusMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let queries = IntCounterVec::new(
            Opts::new("uberdns_query_total", "Queries answered per resolution path and type."),
            &["path", "type"],
        )?;
        let record_depth = IntGaugeVec::new(
            Opts::new("uberdns_record_cache_depth", "Records held per cache family."),
            &["type"],
        )?;
        let domain_depth = IntGaugeVec::new(
            Opts::new("uberdns_domain_cache_depth", "Domains held per cache family."),
            &["type"],
        )?;

        registry.register(Box::new(queries.clone()))?;
        registry.register(Box::new(record_depth.clone()))?;
        registry.register(Box::new(domain_depth.clone()))?;

        Ok(Self {
            registry,
            queries,
            record_depth,
            domain_depth,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

impl ResolutionMetrics for PrometheusMetrics {
    fn record_query(&self, path: &str, record_type: RecordType) {
        let type_label = record_type.to_string();
        self.queries
            .with_label_values(&[path, type_label.as_str()])
            .inc();
    }

    fn set_cache_depth(&self, family: &str, records: usize, domains: usize) {
        self.record_depth
            .with_label_values(&[family])
            .set(i64::try_from(records).unwrap_or(i64::MAX));
        self.domain_depth
            .with_label_values(&[family])
            .set(i64::try_from(domains).unwrap_or(i64::MAX));
    }
}
