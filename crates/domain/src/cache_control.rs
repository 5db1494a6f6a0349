use crate::{DnsRecord, Domain, DomainError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Cache-control envelope published on the invalidation bus.
///
/// `Object` carries the JSON of a [`DnsRecord`] or [`Domain`] as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheControlMessage {
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "Type")]
    pub object_type: String,
    #[serde(rename = "Object")]
    pub object: String,
}

/// A decoded cache-control instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheCommand {
    CreateRecord(DnsRecord),
    PurgeRecord(DnsRecord),
    CreateDomain(Domain),
    PurgeDomain(Domain),
}

impl CacheCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheCommand::CreateRecord(_) => "record/create",
            CacheCommand::PurgeRecord(_) => "record/purge",
            CacheCommand::CreateDomain(_) => "domain/create",
            CacheCommand::PurgeDomain(_) => "domain/purge",
        }
    }
}

impl CacheControlMessage {
    pub fn decode(payload: &str) -> Result<Self, DomainError> {
        serde_json::from_str(payload).map_err(|e| {
            DomainError::InvalidCacheControl(format!("Malformed envelope: {}", e))
        })
    }

    pub fn for_record(action: &str, record: &DnsRecord) -> Result<Self, DomainError> {
        let object = serde_json::to_string(record)
            .map_err(|e| DomainError::InvalidCacheControl(e.to_string()))?;
        Ok(Self {
            action: action.to_string(),
            object_type: "record".to_string(),
            object,
        })
    }

    pub fn for_domain(action: &str, domain: &Domain) -> Result<Self, DomainError> {
        let object = serde_json::to_string(domain)
            .map_err(|e| DomainError::InvalidCacheControl(e.to_string()))?;
        Ok(Self {
            action: action.to_string(),
            object_type: "domain".to_string(),
            object,
        })
    }

    /// Action and type are matched case-insensitively.
    pub fn into_command(self) -> Result<CacheCommand, DomainError> {
        let action = self.action.to_ascii_lowercase();
        let object_type = self.object_type.to_ascii_lowercase();

        match (object_type.as_str(), action.as_str()) {
            ("record", "create") => Ok(CacheCommand::CreateRecord(decode_object(&self.object)?)),
            ("record", "purge") => Ok(CacheCommand::PurgeRecord(decode_object(&self.object)?)),
            ("domain", "create") => Ok(CacheCommand::CreateDomain(decode_object(&self.object)?)),
            ("domain", "purge") => Ok(CacheCommand::PurgeDomain(decode_object(&self.object)?)),
            ("record", _) | ("domain", _) => Err(DomainError::InvalidCacheControl(format!(
                "Unknown action '{}'",
                self.action
            ))),
            _ => Err(DomainError::InvalidCacheControl(format!(
                "Unknown object type '{}'",
                self.object_type
            ))),
        }
    }
}

fn decode_object<T: DeserializeOwned>(object: &str) -> Result<T, DomainError> {
    serde_json::from_str(object)
        .map_err(|e| DomainError::InvalidCacheControl(format!("Malformed object: {}", e)))
}
