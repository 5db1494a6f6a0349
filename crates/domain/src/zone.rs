use serde::{Deserialize, Serialize};

/// A zone this server answers for, or a top-level domain it has resolved
/// recursively before.
///
/// Serialized with the field names used on the invalidation bus (`ID`, `Name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain {
    #[serde(rename = "ID", default)]
    pub id: i64,
    #[serde(rename = "Name", default)]
    pub name: String,
}

impl Domain {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
