mod authoritative_repository;
mod invalidation_bus;
mod resolution_metrics;
mod upstream_resolver;

pub use authoritative_repository::AuthoritativeRepository;
pub use invalidation_bus::InvalidationBus;
pub use resolution_metrics::{NoopResolutionMetrics, ResolutionMetrics};
pub use upstream_resolver::UpstreamResolver;
