pub mod bus_health;
pub mod cache_depth;
pub mod domain_refresh;
pub mod runner;

pub use bus_health::BusHealthJob;
pub use cache_depth::CacheDepthJob;
pub use domain_refresh::DomainRefreshJob;
pub use runner::JobRunner;
