use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::UdpTransport;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uberdns_application::cache::CacheFamily;
use uberdns_application::ports::{ResolutionMetrics, UpstreamResolver};
use uberdns_domain::{AnswerRecord, DomainError, RecordType};

/// Forwarding resolver over a fixed, ordered upstream list.
///
/// Every upstream is asked in turn, each attempt bounded by `timeout`. A
/// failed attempt is logged and the next upstream is tried. The loop runs to
/// the end of the list and the last successful response is the one returned.
pub struct FailoverUpstreamResolver {
    upstreams: Vec<UdpTransport>,
    timeout: Duration,
    metrics: Arc<dyn ResolutionMetrics>,
}

impl FailoverUpstreamResolver {
    pub fn new(
        servers: Vec<SocketAddr>,
        timeout: Duration,
        metrics: Arc<dyn ResolutionMetrics>,
    ) -> Result<Self, DomainError> {
        if servers.is_empty() {
            return Err(DomainError::NoUpstreamServers);
        }

        Ok(Self {
            upstreams: servers.into_iter().map(UdpTransport::new).collect(),
            timeout,
            metrics,
        })
    }

    pub fn servers(&self) -> Vec<SocketAddr> {
        self.upstreams.iter().map(UdpTransport::server_addr).collect()
    }

    async fn attempt(
        &self,
        upstream: &UdpTransport,
        query_id: u16,
        request: &[u8],
    ) -> Result<Vec<AnswerRecord>, DomainError> {
        let bytes = upstream.exchange(request, self.timeout).await?;
        let response = ResponseParser::parse(&bytes)?;

        if response.id != query_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                response.id, query_id
            )));
        }

        debug!(
            server = %upstream.server_addr(),
            rcode = ?response.rcode,
            answers = response.answers.len(),
            "Upstream answered"
        );
        Ok(response.answers)
    }
}

#[async_trait]
impl UpstreamResolver for FailoverUpstreamResolver {
    async fn resolve(&self, fqdn: &str, record_type: RecordType) -> Vec<AnswerRecord> {
        let started = Instant::now();

        let (query_id, request) = match MessageBuilder::build_query(fqdn, record_type) {
            Ok(built) => built,
            Err(e) => {
                warn!(error = %e, domain = %fqdn, "Cannot build upstream query");
                return Vec::new();
            }
        };

        let mut winner: Option<(SocketAddr, Vec<AnswerRecord>)> = None;
        for upstream in &self.upstreams {
            match self.attempt(upstream, query_id, &request).await {
                Ok(answers) => winner = Some((upstream.server_addr(), answers)),
                Err(e) => warn!(
                    server = %upstream.server_addr(),
                    domain = %fqdn,
                    record_type = %record_type,
                    error = %e,
                    "Upstream attempt failed"
                ),
            }
        }

        self.metrics
            .record_query(CacheFamily::Recursive.label(), record_type);
        let latency_ms = started.elapsed().as_millis();

        match winner {
            Some((server, answers)) => {
                info!(
                    domain = %fqdn,
                    record_type = %record_type,
                    upstream = %server,
                    answers = answers.len(),
                    latency_ms,
                    "Recursive resolution"
                );
                answers
            }
            None => {
                warn!(
                    domain = %fqdn,
                    record_type = %record_type,
                    latency_ms,
                    "All upstream servers failed"
                );
                Vec::new()
            }
        }
    }
}
