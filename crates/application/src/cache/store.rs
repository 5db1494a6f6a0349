use super::{CacheFamily, DomainCache, RecordCache};
use uberdns_domain::Domain;

/// Entry counts of one cache family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheDepth {
    pub family: CacheFamily,
    pub records: usize,
    pub domains: usize,
}

/// The four caches, constructed once and shared by handle.
pub struct CacheStore {
    pub authoritative_domains: DomainCache,
    pub authoritative_records: RecordCache,
    pub recursive_domains: DomainCache,
    pub recursive_records: RecordCache,
}

impl CacheStore {
    /// Start all four writers. `authoritative` seeds the authoritative
    /// domain map so that it is complete before the first query.
    pub fn spawn(authoritative: Vec<Domain>) -> Self {
        Self {
            authoritative_domains: DomainCache::spawn(CacheFamily::Authoritative, authoritative),
            authoritative_records: RecordCache::spawn(CacheFamily::Authoritative),
            recursive_domains: DomainCache::spawn(CacheFamily::Recursive, Vec::new()),
            recursive_records: RecordCache::spawn(CacheFamily::Recursive),
        }
    }

    pub fn domains(&self, family: CacheFamily) -> &DomainCache {
        match family {
            CacheFamily::Authoritative => &self.authoritative_domains,
            CacheFamily::Recursive => &self.recursive_domains,
        }
    }

    pub fn records(&self, family: CacheFamily) -> &RecordCache {
        match family {
            CacheFamily::Authoritative => &self.authoritative_records,
            CacheFamily::Recursive => &self.recursive_records,
        }
    }

    pub fn depth(&self, family: CacheFamily) -> CacheDepth {
        CacheDepth {
            family,
            records: self.records(family).len(),
            domains: self.domains(family).len(),
        }
    }

    pub fn depths(&self) -> [CacheDepth; 2] {
        [
            self.depth(CacheFamily::Authoritative),
            self.depth(CacheFamily::Recursive),
        ]
    }
}
