//! DNS Message Builder
//!
//! Constructs upstream query messages and answer records in wire format
//! using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NULL, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use uberdns_domain::{AnswerRecord, DomainError, RecordData, RecordType};

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive query (random ID, RD set, one IN question) and
    /// return its ID together with the serialized bytes.
    pub fn build_query(
        domain: &str,
        record_type: RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = parse_name(domain)?;
        let query = Query::query(name, RecordTypeMapper::to_hickory(record_type));

        let id = fastrand::u16(..);
        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true)
            .add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Convert an answer into a hickory record ready to be put in a response.
    pub fn answer_record(answer: &AnswerRecord) -> Result<Record, DomainError> {
        let name = parse_name(&answer.name)?;
        let rdata = match &answer.data {
            RecordData::A(address) => RData::A(A(*address)),
            RecordData::AAAA(address) => RData::AAAA(AAAA(*address)),
            RecordData::CNAME(target) => RData::CNAME(CNAME(parse_name(target)?)),
            RecordData::MX {
                preference,
                exchange,
            } => RData::MX(MX::new(*preference, parse_name(exchange)?)),
            RecordData::TXT(strings) => {
                RData::TXT(TXT::from_bytes(strings.iter().map(Vec::as_slice).collect()))
            }
            RecordData::Raw { type_code, data } => RData::Unknown {
                code: HickoryRecordType::from(*type_code),
                rdata: NULL::with(data.clone()),
            },
        };

        Ok(Record::from_rdata(name, answer.ttl, rdata))
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

fn parse_name(domain: &str) -> Result<Name, DomainError> {
    Name::from_str(domain)
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e)))
}
