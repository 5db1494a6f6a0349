//! In-memory domain and record caches.
//!
//! Each map has exactly one writer task. Readers take the map's lock directly;
//! mutations travel over channels to the writer so that writes within one
//! map are totally ordered. Record expiry is driven by one timer task per
//! admitted record feeding the same writer.

mod domain_cache;
mod domain_map;
mod family;
mod record_cache;
mod record_map;
mod store;
mod ttl_watcher;
mod writer;

pub use domain_cache::DomainCache;
pub use domain_map::DomainMap;
pub use family::CacheFamily;
pub use record_cache::RecordCache;
pub use record_map::RecordMap;
pub use store::{CacheDepth, CacheStore};
pub use ttl_watcher::spawn_ttl_watcher;
pub use writer::{DomainOp, RecordOp};
