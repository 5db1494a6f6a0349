use super::RecordOp;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::trace;
use uberdns_domain::DnsRecord;

/// Sleep for the record's TTL, then ask the writer to expire it.
///
/// Single-shot and never cancelled; a record purged earlier by other means
/// makes the expiry a no-op in the writer. Must only be started after the
/// insert was queued on the same channel.
pub fn spawn_ttl_watcher(
    record: DnsRecord,
    ops: UnboundedSender<RecordOp>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(u64::from(record.ttl))).await;
        let id = record.id;
        if ops.send(RecordOp::Expired(record)).is_err() {
            trace!(record_id = id, "Cache writer closed before expiry");
        }
    })
}
