use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uberdns_domain::DnsRecord;

#[derive(Debug, Default)]
struct Entries {
    by_id: HashMap<i64, DnsRecord>,
    by_key: HashMap<(String, i64), i64>,
}

impl Entries {
    fn remove(&mut self, id: i64) -> Option<DnsRecord> {
        let removed = self.by_id.remove(&id)?;
        let key = (removed.name.clone(), removed.domain_id);
        if self.by_key.get(&key) == Some(&id) {
            self.by_key.remove(&key);
        }
        Some(removed)
    }
}

/// Records keyed by ID, at most one entry per `(name, domain_id)`.
///
/// Same locking discipline as [`DomainMap`](super::DomainMap). The
/// `(name, domain_id)` index lives under the same lock as the entries.
#[derive(Debug, Default)]
pub struct RecordMap {
    inner: RwLock<Entries>,
}

impl RecordMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> HashMap<i64, DnsRecord> {
        self.read().by_id.clone()
    }

    pub fn get(&self, id: i64) -> Option<DnsRecord> {
        self.read().by_id.get(&id).cloned()
    }

    pub fn find(&self, name: &str, domain_id: i64) -> Option<DnsRecord> {
        let entries = self.read();
        let id = entries.by_key.get(&(name.to_string(), domain_id))?;
        entries.by_id.get(id).cloned()
    }

    /// True when an entry has the same ID, or failing that the same
    /// `(name, domain_id)`.
    pub fn contains(&self, record: &DnsRecord) -> bool {
        let entries = self.read();
        entries.by_id.contains_key(&record.id)
            || entries
                .by_key
                .contains_key(&(record.name.clone(), record.domain_id))
    }

    pub fn len(&self) -> usize {
        self.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().by_id.is_empty()
    }

    /// Upsert by ID. Any other entry with the same `(name, domain_id)` is
    /// evicted. Returns the entry previously stored under this ID.
    pub fn add(&self, record: DnsRecord) -> Option<DnsRecord> {
        let mut entries = self.write();
        let key = (record.name.clone(), record.domain_id);
        if let Some(&other) = entries.by_key.get(&key) {
            if other != record.id {
                entries.remove(other);
            }
        }
        let previous = entries.remove(record.id);
        entries.by_key.insert(key, record.id);
        entries.by_id.insert(record.id, record);
        previous
    }

    pub fn delete(&self, id: i64) -> Option<DnsRecord> {
        self.write().remove(id)
    }

    /// Remove the entry under `id` only if it was admitted at `dob`.
    pub fn delete_incarnation(&self, id: i64, dob: Option<DateTime<Utc>>) -> Option<DnsRecord> {
        let mut entries = self.write();
        match entries.by_id.get(&id) {
            Some(cached) if cached.dob == dob => entries.remove(id),
            _ => None,
        }
    }
}
