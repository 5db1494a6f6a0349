use crate::cache::{CacheFamily, CacheStore};
use crate::ports::{AuthoritativeRepository, ResolutionMetrics, UpstreamResolver};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use uberdns_domain::{AnswerRecord, DnsQuery, DnsRecord, Domain, QueryName, RecordType};

/// Where the answer to a query came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    /// Non-A question passed straight to the upstream resolvers.
    Forwarded,
    AuthoritativeCache,
    AuthoritativeDatabase,
    RecursiveCache,
    Upstream,
    /// Authoritative zone, but no usable record.
    NoAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub answers: Vec<AnswerRecord>,
    pub source: AnswerSource,
}

impl Resolution {
    fn new(answers: Vec<AnswerRecord>, source: AnswerSource) -> Self {
        Self { answers, source }
    }

    fn no_answer() -> Self {
        Self::new(Vec::new(), AnswerSource::NoAnswer)
    }

    fn from_cached(fqdn: &str, record: &DnsRecord, source: AnswerSource) -> Self {
        match cached_answer(fqdn, record) {
            Some(answer) => Self::new(vec![answer], source),
            None => Self::no_answer(),
        }
    }
}

/// A records come from the caches or the database; everything else is
/// forwarded.
///
/// Authoritative zones win over recursive ones, a cached record wins over the
/// database and over the upstreams. Newly learned records are handed to the
/// cache writers without waiting for them to be applied.
pub struct ResolveQueryUseCase {
    cache: Arc<CacheStore>,
    repository: Arc<dyn AuthoritativeRepository>,
    upstream: Arc<dyn UpstreamResolver>,
    metrics: Arc<dyn ResolutionMetrics>,
}

impl ResolveQueryUseCase {
    pub fn new(
        cache: Arc<CacheStore>,
        repository: Arc<dyn AuthoritativeRepository>,
        upstream: Arc<dyn UpstreamResolver>,
        metrics: Arc<dyn ResolutionMetrics>,
    ) -> Self {
        Self {
            cache,
            repository,
            upstream,
            metrics,
        }
    }

    #[instrument(skip_all, fields(name = %query.name, record_type = %query.record_type))]
    pub async fn execute(&self, query: &DnsQuery) -> Resolution {
        let fqdn = query.fqdn();

        if !query.record_type.is_cacheable() {
            let answers = self.upstream.resolve(&fqdn, query.record_type).await;
            return Resolution::new(answers, AnswerSource::Forwarded);
        }

        let qname = QueryName::parse(&query.name);
        match self
            .cache
            .authoritative_domains
            .find_by_name(&qname.top_level_domain)
        {
            Some(domain) => self.resolve_authoritative(&fqdn, &qname, &domain).await,
            None => self.resolve_recursive(&fqdn, &qname).await,
        }
    }

    async fn resolve_authoritative(
        &self,
        fqdn: &str,
        qname: &QueryName,
        domain: &Domain,
    ) -> Resolution {
        self.metrics
            .record_query(CacheFamily::Authoritative.label(), RecordType::A);

        let records = &self.cache.authoritative_records;
        if let Some(record) = records.lookup(&qname.subdomain, domain.id) {
            debug!(record_id = record.id, "Authoritative cache hit");
            return Resolution::from_cached(fqdn, &record, AnswerSource::AuthoritativeCache);
        }

        match self.repository.find_record(&qname.subdomain, domain.id).await {
            Ok(Some(record)) if record.is_cacheable() => {
                let resolution =
                    Resolution::from_cached(fqdn, &record, AnswerSource::AuthoritativeDatabase);
                records.admit(record);
                resolution
            }
            Ok(Some(record)) => {
                debug!(record_id = record.id, ip = %record.ip, "Stored record is not servable");
                Resolution::no_answer()
            }
            Ok(None) => {
                debug!(
                    subdomain = %qname.subdomain,
                    domain = %domain.name,
                    "No authoritative record"
                );
                Resolution::no_answer()
            }
            Err(e) => {
                warn!(error = %e, domain = %domain.name, "Authoritative lookup failed");
                Resolution::no_answer()
            }
        }
    }

    async fn resolve_recursive(&self, fqdn: &str, qname: &QueryName) -> Resolution {
        let domains = &self.cache.recursive_domains;

        if let Some(domain) = domains.find_by_name(&qname.top_level_domain) {
            if let Some(record) = self
                .cache
                .recursive_records
                .lookup(&qname.subdomain, domain.id)
            {
                debug!(record_id = record.id, "Recursive cache hit");
                return Resolution::from_cached(fqdn, &record, AnswerSource::RecursiveCache);
            }

            let answers = self.upstream.resolve(fqdn, RecordType::A).await;
            self.cache_upstream_answers(&qname.subdomain, domain.id, &answers);
            return Resolution::new(answers, AnswerSource::Upstream);
        }

        let answers = self.upstream.resolve(fqdn, RecordType::A).await;
        if !answers.is_empty() {
            let domain = Domain::new(domains.next_id(), qname.top_level_domain.clone());
            let domain_id = domain.id;
            domains.insert(domain);
            self.cache_upstream_answers(&qname.subdomain, domain_id, &answers);
        }
        Resolution::new(answers, AnswerSource::Upstream)
    }

    fn cache_upstream_answers(&self, subdomain: &str, domain_id: i64, answers: &[AnswerRecord]) {
        let records = &self.cache.recursive_records;
        for answer in answers {
            if let Some(address) = answer.as_ipv4() {
                let record = DnsRecord::new(
                    records.next_id(),
                    subdomain,
                    address.to_string(),
                    answer.ttl,
                    domain_id,
                );
                records.admit(record);
            }
        }
    }
}

/// A answer for `record` carrying the TTL it has left.
fn cached_answer(fqdn: &str, record: &DnsRecord) -> Option<AnswerRecord> {
    let address = record.ipv4()?;
    Some(AnswerRecord::a(
        fqdn,
        record.remaining_ttl(Utc::now()),
        address,
    ))
}
