use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Payload of an answer resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    MX { preference: u16, exchange: String },
    /// Character-strings as sent, not necessarily UTF-8.
    TXT(Vec<Vec<u8>>),
    /// Any other type, kept as its wire-format RDATA.
    Raw { type_code: u16, data: Vec<u8> },
}

/// One resource record of an answer section, independent of the wire codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    /// Owner name, fully qualified
    pub name: String,
    pub ttl: u32,
    pub data: RecordData,
}

impl AnswerRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn a(name: impl Into<String>, ttl: u32, address: Ipv4Addr) -> Self {
        Self::new(name, ttl, RecordData::A(address))
    }

    pub fn record_type(&self) -> RecordType {
        match self.data {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::MX { .. } => RecordType::MX,
            RecordData::TXT(_) => RecordType::TXT,
            RecordData::Raw { type_code, .. } => RecordType::from_u16(type_code),
        }
    }

    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self.data {
            RecordData::A(addr) => Some(addr),
            _ => None,
        }
    }
}
