pub mod debug;
pub mod health;
pub mod metrics;

pub use debug::{get_recursive_domains, get_recursive_records};
pub use health::health_check;
pub use metrics::get_metrics;
