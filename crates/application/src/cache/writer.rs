use super::{CacheFamily, DomainMap, RecordMap};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};
use uberdns_domain::{DnsRecord, Domain};

/// A mutation for the record writer. Inserts and removals share one channel
/// so the writer applies them in the order they were sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOp {
    Insert(DnsRecord),
    /// The TTL of this cached copy elapsed. Only removes the entry if it is
    /// still the same incarnation (same DOB).
    Expired(DnsRecord),
    /// Externally requested removal by ID.
    Evict(i64),
}

/// A mutation for the domain writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainOp {
    Insert(Domain),
    Remove(i64),
}

/// Sole writer of a record map. Runs until every sender is dropped.
pub(crate) async fn run_record_writer(
    family: CacheFamily,
    map: Arc<RecordMap>,
    mut ops: UnboundedReceiver<RecordOp>,
) {
    while let Some(op) = ops.recv().await {
        match op {
            RecordOp::Insert(record) => apply_insert(family, &map, record),
            RecordOp::Expired(record) => apply_expiry(family, &map, record),
            RecordOp::Evict(id) => apply_evict(family, &map, id),
        }
    }
    debug!(cache = %family, "Record cache writer stopped");
}

fn apply_insert(family: CacheFamily, map: &RecordMap, record: DnsRecord) {
    info!(
        cache = %family,
        record_id = record.id,
        name = %record.name,
        domain_id = record.domain_id,
        ip = %record.ip,
        ttl = record.ttl,
        "Record cached"
    );
    map.add(record);
}

fn apply_expiry(family: CacheFamily, map: &RecordMap, record: DnsRecord) {
    match map.delete_incarnation(record.id, record.dob) {
        Some(removed) => info!(
            cache = %family,
            record_id = removed.id,
            name = %removed.name,
            domain_id = removed.domain_id,
            "Record expired"
        ),
        None => debug!(
            cache = %family,
            record_id = record.id,
            "Expiry for record no longer cached"
        ),
    }
}

fn apply_evict(family: CacheFamily, map: &RecordMap, id: i64) {
    match map.delete(id) {
        Some(removed) => info!(
            cache = %family,
            record_id = removed.id,
            name = %removed.name,
            domain_id = removed.domain_id,
            "Record purged"
        ),
        None => debug!(cache = %family, record_id = id, "Purge for absent record"),
    }
}

/// Sole writer of a domain map. Runs until the channel is closed.
pub(crate) async fn run_domain_writer(
    family: CacheFamily,
    map: Arc<DomainMap>,
    mut ops: UnboundedReceiver<DomainOp>,
) {
    while let Some(op) = ops.recv().await {
        match op {
            DomainOp::Insert(domain) => {
                info!(cache = %family, domain_id = domain.id, domain = %domain.name, "Domain cached");
                map.add(domain);
            }
            DomainOp::Remove(id) => {
                if let Some(removed) = map.delete(id) {
                    info!(cache = %family, domain_id = id, domain = %removed.name, "Domain removed");
                }
            }
        }
    }
    debug!(cache = %family, "Domain cache writer stopped");
}
