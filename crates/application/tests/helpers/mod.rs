#![allow(dead_code)]


pub use mock_ports::*;

use std::time::Duration;
use uberdns_domain::{AnswerRecord, DnsRecord};

/// Give the cache writer tasks a chance to drain their channels.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}

pub fn make_record(id: i64, name: &str, ip: &str, ttl: u32, domain_id: i64) -> DnsRecord {
    DnsRecord::new(id, name, ip, ttl, domain_id)
}

pub fn a_answer(fqdn: &str, ip: &str, ttl: u32) -> AnswerRecord {
    AnswerRecord::a(fqdn, ttl, ip.parse().unwrap())
}
