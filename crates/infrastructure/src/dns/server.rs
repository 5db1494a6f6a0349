use super::forwarding::{MessageBuilder, RecordTypeMapper};
use async_trait::async_trait;
use hickory_proto::op::{Header, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, warn};
use uberdns_application::use_cases::ResolveQueryUseCase;
use uberdns_domain::DnsQuery;

/// hickory-server entry point: one call per inbound query.
///
/// Every response is authoritative. A question with no usable answer gets
/// NOERROR with an empty answer section.
#[derive(Clone)]
pub struct DnsServerHandler {
    resolve_query: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(resolve_query: Arc<ResolveQueryUseCase>) -> Self {
        Self { resolve_query }
    }

    async fn answer(&self, request: &Request) -> Vec<Record> {
        let question = request.query().original();
        let query = DnsQuery::new(
            question.name().to_string(),
            RecordTypeMapper::from_hickory(question.query_type()),
        );

        let resolution = self.resolve_query.execute(&query).await;
        debug!(
            name = %query.name,
            record_type = %query.record_type,
            source = ?resolution.source,
            answers = resolution.answers.len(),
            "Query resolved"
        );

        resolution
            .answers
            .iter()
            .filter_map(|answer| match MessageBuilder::answer_record(answer) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(error = %e, owner = %answer.name, "Dropping unencodable answer");
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let builder = MessageResponseBuilder::from_message_request(request);

        if request.op_code() != OpCode::Query || request.message_type() != MessageType::Query {
            debug!(op_code = ?request.op_code(), "Rejecting non-query message");
            let response = builder.error_msg(request.header(), ResponseCode::NotImp);
            return response_handle
                .send_response(response)
                .await
                .unwrap_or_else(send_failed);
        }

        let answers = self.answer(request).await;

        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);
        header.set_recursion_available(true);
        header.set_response_code(ResponseCode::NoError);

        let response = builder.build(header, answers.iter(), &[], &[], &[]);
        response_handle
            .send_response(response)
            .await
            .unwrap_or_else(send_failed)
    }
}

fn send_failed(e: std::io::Error) -> ResponseInfo {
    error!(error = %e, "Failed to send DNS response");
    let mut header = Header::new();
    header.set_response_code(ResponseCode::ServFail);
    header.into()
}
