use async_trait::async_trait;
use uberdns_domain::{AnswerRecord, RecordType};

/// Forwards a question to the configured upstream resolvers.
///
/// Failures are absorbed by the implementation: when no upstream produced an
/// answer the result is simply empty.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    async fn resolve(&self, fqdn: &str, record_type: RecordType) -> Vec<AnswerRecord>;
}
