use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// A host record: one label under a [`Domain`](crate::Domain) mapped to an IPv4
/// address.
///
/// `dob` ("date of birth") is stamped when the record enters the cache, not
/// when its row was created in the database. Expiry is measured from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "ID", default)]
    pub id: i64,
    /// Subdomain label
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Dotted-quad address
    #[serde(rename = "IP", default)]
    pub ip: String,
    /// Time to live in seconds
    #[serde(rename = "TTL", default)]
    pub ttl: u32,
    #[serde(rename = "Created", default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(rename = "DOB", default)]
    pub dob: Option<DateTime<Utc>>,
    #[serde(rename = "DomainID", default)]
    pub domain_id: i64,
}

impl DnsRecord {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        ip: impl Into<String>,
        ttl: u32,
        domain_id: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            ip: ip.into(),
            ttl,
            created: None,
            dob: None,
            domain_id,
        }
    }

    /// Parsed address, `None` when the stored IP is empty or not IPv4.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        self.ip.parse().ok()
    }

    /// Whether this record may be admitted to a cache and served as a hit.
    pub fn is_cacheable(&self) -> bool {
        self.id != 0 && self.ipv4().is_some()
    }

    /// Stamp the cache entry time.
    pub fn born_at(mut self, now: DateTime<Utc>) -> Self {
        self.dob = Some(now);
        self
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.dob.map(|dob| dob + Duration::seconds(i64::from(self.ttl)))
    }

    /// `now - dob > ttl`. A record that never entered a cache does not expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.dob {
            Some(dob) => (now - dob).num_seconds() > i64::from(self.ttl),
            None => false,
        }
    }

    /// TTL left relative to `now`, floored at zero.
    pub fn remaining_ttl(&self, now: DateTime<Utc>) -> u32 {
        match self.dob {
            Some(dob) => {
                let elapsed = (now - dob).num_seconds().max(0);
                let left = i64::from(self.ttl) - elapsed;
                u32::try_from(left.max(0)).unwrap_or(0)
            }
            None => self.ttl,
        }
    }

    /// Same cached content, ignoring timestamps.
    pub fn same_content(&self, other: &DnsRecord) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.ip == other.ip
            && self.ttl == other.ttl
            && self.domain_id == other.domain_id
    }
}
