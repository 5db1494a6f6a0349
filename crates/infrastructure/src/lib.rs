//! Adapters: SQLite store, DNS wire handling, upstream forwarding, Redis
//! invalidation and Prometheus metrics.
pub mod database;
pub mod dns;
pub mod invalidation;
pub mod metrics;
pub mod repositories;
