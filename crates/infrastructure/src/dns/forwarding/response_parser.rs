use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use tracing::debug;
use uberdns_domain::{AnswerRecord, DomainError, RecordData};

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answer section, in wire order
    pub answers: Vec<AnswerRecord>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let answers: Vec<AnswerRecord> = message
            .answers()
            .iter()
            .filter_map(Self::to_answer)
            .collect();

        debug!(
            rcode = ?message.response_code(),
            answers = answers.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            answers,
        })
    }

    /// Convert one wire record. Records without RDATA are skipped; types
    /// without a dedicated variant are kept as raw RDATA.
    pub fn to_answer(record: &Record) -> Option<AnswerRecord> {
        let data = match record.data()? {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::CNAME(canonical) => RecordData::CNAME(canonical.0.to_utf8()),
            RData::MX(mx) => RecordData::MX {
                preference: mx.preference(),
                exchange: mx.exchange().to_utf8(),
            },
            RData::TXT(txt) => {
                RecordData::TXT(txt.txt_data().iter().map(|s| s.to_vec()).collect())
            }
            other => RecordData::Raw {
                type_code: u16::from(record.record_type()),
                data: encode_rdata(other)?,
            },
        };

        Some(AnswerRecord::new(record.name().to_utf8(), record.ttl(), data))
    }
}

fn encode_rdata(rdata: &RData) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    let mut encoder = BinEncoder::new(&mut buf);
    // Name compression would point into this scratch buffer.
    encoder.set_canonical_names(true);
    rdata.emit(&mut encoder).ok()?;
    Some(buf)
}
