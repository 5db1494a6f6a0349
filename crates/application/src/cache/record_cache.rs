use super::writer::run_record_writer;
use super::{spawn_ttl_watcher, CacheFamily, RecordMap, RecordOp};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, trace, warn};
use uberdns_domain::DnsRecord;

/// Handle to one record map and its writer task.
///
/// Reads go straight to the map. [`admit`](Self::admit) and
/// [`purge`](Self::purge) are asynchronous: they return once the request is
/// queued for the writer.
pub struct RecordCache {
    family: CacheFamily,
    map: Arc<RecordMap>,
    ops: UnboundedSender<RecordOp>,
    next_id: AtomicI64,
}

impl RecordCache {
    /// Create an empty cache and start its writer. Must be called from
    /// within a tokio runtime.
    pub fn spawn(family: CacheFamily) -> Self {
        let map = Arc::new(RecordMap::new());
        let (ops, ops_rx) = mpsc::unbounded_channel();

        tokio::spawn(run_record_writer(family, Arc::clone(&map), ops_rx));

        Self {
            family,
            map,
            ops,
            next_id: AtomicI64::new(1),
        }
    }

    pub fn family(&self) -> CacheFamily {
        self.family
    }

    /// A servable record for `(name, domain_id)`: present, cacheable and not
    /// past its TTL.
    pub fn lookup(&self, name: &str, domain_id: i64) -> Option<DnsRecord> {
        let now = Utc::now();
        self.map
            .find(name, domain_id)
            .filter(|r| r.is_cacheable() && !r.is_expired(now))
    }

    /// Stamp `record` with the current time, queue it for insertion and
    /// start its TTL watcher.
    ///
    /// Returns `false` without queueing anything when the record is not
    /// cacheable or an identical live copy is already cached.
    pub fn admit(&self, record: DnsRecord) -> bool {
        if !record.is_cacheable() {
            debug!(
                cache = %self.family,
                record_id = record.id,
                name = %record.name,
                ip = %record.ip,
                "Rejecting uncacheable record"
            );
            return false;
        }

        let now = Utc::now();
        if let Some(cached) = self.map.find(&record.name, record.domain_id) {
            if cached.same_content(&record) && !cached.is_expired(now) {
                trace!(cache = %self.family, record_id = record.id, "Record already cached");
                return false;
            }
        }

        let record = record.born_at(now);
        if self.ops.send(RecordOp::Insert(record.clone())).is_err() {
            warn!(cache = %self.family, record_id = record.id, "Record cache writer is gone");
            return false;
        }
        spawn_ttl_watcher(record, self.ops.clone());
        true
    }

    /// Queue removal of the record with `id`, whatever its age.
    pub fn purge(&self, id: i64) -> bool {
        if self.ops.send(RecordOp::Evict(id)).is_err() {
            warn!(cache = %self.family, record_id = id, "Record cache writer is gone");
            return false;
        }
        true
    }

    /// Next process-local record ID. Never reused.
    pub fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn get(&self, id: i64) -> Option<DnsRecord> {
        self.map.get(id)
    }

    pub fn contains(&self, record: &DnsRecord) -> bool {
        self.map.contains(record)
    }

    pub fn snapshot(&self) -> HashMap<i64, DnsRecord> {
        self.map.snapshot()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
