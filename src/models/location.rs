use serde::Serialize;
use std::fmt;

/// Where the cat is relative to the door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Location {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

impl Location {
    /// Convert enum → log string
    pub fn code(&self) -> &'static str {
        match self {
            Location::In => "IN",
            Location::Out => "OUT",
        }
    }

    /// Convert log string → enum (exact match, as written by the log store)
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "IN" => Some(Location::In),
            "OUT" => Some(Location::Out),
            _ => None,
        }
    }

    /// Parse a remote message payload.
    ///
    /// Devices publish the bare word, but payloads that went through a
    /// bytes-to-string round trip arrive as `b'IN'` or `"OUT"`; those
    /// wrappers are stripped before matching.
    pub fn from_payload(payload: &str) -> Option<Self> {
        let trimmed = payload.trim();
        let inner = trimmed.strip_prefix('b').unwrap_or(trimmed);
        let inner = inner.trim_matches(|c| c == '\'' || c == '"');
        Location::from_code(inner.trim())
    }

    pub fn opposite(&self) -> Self {
        match self {
            Location::In => Location::Out,
            Location::Out => Location::In,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, Location::In)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
