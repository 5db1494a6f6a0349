use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uberdns_domain::Domain;

#[derive(Debug, Default)]
struct Entries {
    by_id: HashMap<i64, Domain>,
    by_name: HashMap<String, i64>,
}

impl Entries {
    fn remove(&mut self, id: i64) -> Option<Domain> {
        let removed = self.by_id.remove(&id)?;
        if self.by_name.get(&removed.name) == Some(&id) {
            self.by_name.remove(&removed.name);
        }
        Some(removed)
    }
}

/// Domains keyed by ID, at most one entry per name.
///
/// Every method takes the lock once for its whole duration and never calls
/// another locking method while holding it. The name index lives under the
/// same lock.
#[derive(Debug, Default)]
pub struct DomainMap {
    inner: RwLock<Entries>,
}

impl DomainMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domains(domains: impl IntoIterator<Item = Domain>) -> Self {
        let map = Self::new();
        for domain in domains {
            map.add(domain);
        }
        map
    }

    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> HashMap<i64, Domain> {
        self.read().by_id.clone()
    }

    pub fn get(&self, id: i64) -> Option<Domain> {
        self.read().by_id.get(&id).cloned()
    }

    pub fn find_by_name(&self, name: &str) -> Option<Domain> {
        let entries = self.read();
        let id = entries.by_name.get(name)?;
        entries.by_id.get(id).cloned()
    }

    /// True when an entry has the same ID, or failing that the same name.
    pub fn contains(&self, domain: &Domain) -> bool {
        let entries = self.read();
        entries.by_id.contains_key(&domain.id) || entries.by_name.contains_key(&domain.name)
    }

    pub fn len(&self) -> usize {
        self.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().by_id.is_empty()
    }

    /// Upsert by ID. Any other entry with the same name is evicted.
    /// Returns the entry previously stored under this ID.
    pub fn add(&self, domain: Domain) -> Option<Domain> {
        let mut entries = self.write();
        if let Some(&other) = entries.by_name.get(&domain.name) {
            if other != domain.id {
                entries.remove(other);
            }
        }
        let previous = entries.remove(domain.id);
        entries.by_name.insert(domain.name.clone(), domain.id);
        entries.by_id.insert(domain.id, domain);
        previous
    }

    pub fn delete(&self, id: i64) -> Option<Domain> {
        self.write().remove(id)
    }
}
