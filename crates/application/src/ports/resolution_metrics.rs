use uberdns_domain::RecordType;

/// Counters and gauges emitted by the resolution engine.
///
/// `path` and `family` are the cache family labels (`"uberdns"` for
/// authoritative, `"recurse"` for recursive).
pub trait ResolutionMetrics: Send + Sync {
    fn record_query(&self, path: &str, record_type: RecordType);

    fn set_cache_depth(&self, family: &str, records: usize, domains: usize);
}

/// Discards everything. Used where no registry is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopResolutionMetrics;

impl ResolutionMetrics for NoopResolutionMetrics {
    fn record_query(&self, _path: &str, _record_type: RecordType) {}

    fn set_cache_depth(&self, _family: &str, _records: usize, _domains: usize) {}
}
