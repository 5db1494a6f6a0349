use super::RecordType;
use std::sync::Arc;

/// DNS question (name + record type) as received from the transport.
/// Uses `Arc<str>` for cheap cloning into cache-population tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }

    /// Name with a trailing root dot.
    pub fn fqdn(&self) -> String {
        if self.name.ends_with('.') {
            self.name.to_string()
        } else {
            format!("{}.", self.name)
        }
    }
}

/// A query name split into its leaf label and the zone it is looked up under.
///
/// With more than one dot the first label is the subdomain and the last two
/// labels are the zone (`a.b.example.com` gives `a` under `example.com`).
/// Multi-label public suffixes such as `co.uk` are not recognised. Names are
/// compared as received; no case folding happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryName {
    pub subdomain: String,
    pub top_level_domain: String,
}

impl QueryName {
    pub fn parse(name: &str) -> Self {
        let clean = name.trim_end_matches('.');
        let labels: Vec<&str> = clean.split('.').collect();

        if labels.len() > 2 {
            Self {
                subdomain: labels[0].to_string(),
                top_level_domain: labels[labels.len() - 2..].join("."),
            }
        } else {
            Self {
                subdomain: String::new(),
                top_level_domain: clean.to_string(),
            }
        }
    }
}
