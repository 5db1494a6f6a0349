//! Resolution pipeline, in-memory caches and the ports they depend on.
pub mod cache;
pub mod ports;
pub mod use_cases;
