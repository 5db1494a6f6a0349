use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use uberdns_domain::{DnsRecord, Domain};

/// Dump of the recursive domain cache, keyed by domain ID.
#[derive(Serialize, Debug, Clone)]
pub struct RecursiveDomainsResponse {
    #[serde(rename = "RecursiveCount")]
    pub count: usize,
    #[serde(rename = "RecursiveDomains")]
    pub domains: BTreeMap<i64, Domain>,
}

impl From<HashMap<i64, Domain>> for RecursiveDomainsResponse {
    fn from(domains: HashMap<i64, Domain>) -> Self {
        Self {
            count: domains.len(),
            domains: domains.into_iter().collect(),
        }
    }
}

/// Dump of the recursive record cache, keyed by record ID.
#[derive(Serialize, Debug, Clone)]
pub struct RecursiveRecordsResponse {
    #[serde(rename = "RecursiveCount")]
    pub count: usize,
    #[serde(rename = "RecursiveRecords")]
    pub records: BTreeMap<i64, DnsRecord>,
}

impl From<HashMap<i64, DnsRecord>> for RecursiveRecordsResponse {
    fn from(records: HashMap<i64, DnsRecord>) -> Self {
        Self {
            count: records.len(),
            records: records.into_iter().collect(),
        }
    }
}
