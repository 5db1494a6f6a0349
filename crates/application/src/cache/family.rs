use std::fmt;

/// The two independent cache families. They never share entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheFamily {
    Authoritative,
    Recursive,
}

impl CacheFamily {
    /// Label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            CacheFamily::Authoritative => "uberdns",
            CacheFamily::Recursive => "recurse",
        }
    }
}

impl fmt::Display for CacheFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
