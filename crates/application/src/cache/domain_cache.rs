use super::writer::run_domain_writer;
use super::{CacheFamily, DomainMap, DomainOp};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::warn;
use uberdns_domain::Domain;

/// Handle to one domain map and its writer task.
pub struct DomainCache {
    family: CacheFamily,
    map: Arc<DomainMap>,
    ops: UnboundedSender<DomainOp>,
    next_id: AtomicI64,
}

impl DomainCache {
    /// Start a writer over a map pre-populated with `seed`. Must be called
    /// from within a tokio runtime.
    pub fn spawn(family: CacheFamily, seed: Vec<Domain>) -> Self {
        let first_id = seed.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        let map = Arc::new(DomainMap::with_domains(seed));
        let (ops, ops_rx) = mpsc::unbounded_channel();

        tokio::spawn(run_domain_writer(family, Arc::clone(&map), ops_rx));

        Self {
            family,
            map,
            ops,
            next_id: AtomicI64::new(first_id),
        }
    }

    pub fn family(&self) -> CacheFamily {
        self.family
    }

    pub fn find_by_name(&self, name: &str) -> Option<Domain> {
        self.map.find_by_name(name)
    }

    pub fn get(&self, id: i64) -> Option<Domain> {
        self.map.get(id)
    }

    pub fn contains(&self, domain: &Domain) -> bool {
        self.map.contains(domain)
    }

    pub fn insert(&self, domain: Domain) -> bool {
        self.send(DomainOp::Insert(domain))
    }

    pub fn remove(&self, id: i64) -> bool {
        self.send(DomainOp::Remove(id))
    }

    fn send(&self, op: DomainOp) -> bool {
        if self.ops.send(op).is_err() {
            warn!(cache = %self.family, "Domain cache writer is gone");
            return false;
        }
        true
    }

    /// Next process-local domain ID. Never reused.
    pub fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> HashMap<i64, Domain> {
        self.map.snapshot()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
