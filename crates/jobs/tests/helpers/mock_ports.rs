use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use uberdns_application::ports::{AuthoritativeRepository, InvalidationBus, ResolutionMetrics};
use uberdns_domain::{DnsRecord, Domain, DomainError, RecordType};

// ============================================================================
// Mock InvalidationBus
// ============================================================================

#[derive(Default)]
pub struct MockInvalidationBus {
    pings: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockInvalidationBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn pings(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InvalidationBus for MockInvalidationBus {
    async fn ping(&self) -> Result<(), DomainError> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::InvalidationBus("Mock bus down".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Mock AuthoritativeRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockAuthoritativeRepository {
    domains: Arc<RwLock<Vec<Domain>>>,
    loads: Arc<AtomicUsize>,
}

impl MockAuthoritativeRepository {
    pub async fn with_domains(domains: Vec<Domain>) -> Self {
        let repo = Self::default();
        *repo.domains.write().await = domains;
        repo
    }

    pub async fn set_domains(&self, domains: Vec<Domain>) {
        *self.domains.write().await = domains;
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthoritativeRepository for MockAuthoritativeRepository {
    async fn load_domains(&self) -> Result<Vec<Domain>, DomainError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.domains.read().await.clone())
    }

    async fn find_record(
        &self,
        _name: &str,
        _domain_id: i64,
    ) -> Result<Option<DnsRecord>, DomainError> {
        Ok(None)
    }
}

// ============================================================================
// Recording ResolutionMetrics
// ============================================================================

#[derive(Default)]
pub struct RecordingMetrics {
    depths: Mutex<HashMap<String, (usize, usize)>>,
    updates: AtomicUsize,
}

impl RecordingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self, family: &str) -> Option<(usize, usize)> {
        self.depths.lock().unwrap().get(family).copied()
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl ResolutionMetrics for RecordingMetrics {
    fn record_query(&self, _path: &str, _record_type: RecordType) {}

    fn set_cache_depth(&self, family: &str, records: usize, domains: usize) {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.depths
            .lock()
            .unwrap()
            .insert(family.to_string(), (records, domains));
    }
}
