use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============ Record Types ============

/// DNS record type of a canonical [`Record`].
///
/// Serialized as the uppercase mnemonic (`"A"`, `"AAAA"`, `"CNAME"`, ...). Types without a
/// dedicated variant are kept verbatim in [`Other`](Self::Other) so providers can reject them
/// with a precise error instead of failing to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Name server record.
    Ns,
    /// Text record.
    Txt,
    /// TLS certificate association record.
    Tlsa,
    /// Service locator record.
    Srv,
    /// Certificate Authority Authorization record.
    Caa,
    /// Reverse pointer record.
    Ptr,
    /// Any other type, uppercased.
    Other(String),
}

impl RecordType {
    /// Uppercase mnemonic as used on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Txt => "TXT",
            Self::Tlsa => "TLSA",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
            Self::Ptr => "PTR",
            Self::Other(other) => other,
        }
    }
}

impl From<&str> for RecordType {
    fn from(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "A" => Self::A,
            "AAAA" => Self::Aaaa,
            "CNAME" => Self::Cname,
            "MX" => Self::Mx,
            "NS" => Self::Ns,
            "TXT" => Self::Txt,
            "TLSA" => Self::Tlsa,
            "SRV" => Self::Srv,
            "CAA" => Self::Caa,
            "PTR" => Self::Ptr,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for RecordType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        match value {
            RecordType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for RecordType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Canonical Record ============

/// A DNS record in the provider-independent shape used by callers.
///
/// `name` is relative to the zone the record belongs to (`"www"`, or `"@"` for the apex).
/// `priority` is only meaningful for MX records and is `0` for every other type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Provider-specific record identifier, empty for records not yet created.
    #[serde(default)]
    pub id: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Zone-relative record name.
    pub name: String,
    /// Type-specific record value (address, target host, text, ...).
    pub value: String,
    /// Time to live.
    pub ttl: Duration,
    /// Preference of MX records.
    #[serde(default)]
    pub priority: u32,
}

impl Record {
    /// Build a record that has not been created at the provider yet.
    pub fn new(
        record_type: impl Into<RecordType>,
        name: impl Into<String>,
        value: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            id: String::new(),
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ttl,
            priority: 0,
        }
    }

    /// Set the provider identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the MX preference.
    #[must_use]
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} (TTL {}s",
            self.name,
            self.record_type,
            self.value,
            self.ttl.as_secs()
        )?;
        if self.priority > 0 {
            write!(f, ", priority {}", self.priority)?;
        }
        f.write_str(")")
    }
}

// ============ Zone ============

/// A DNS zone as seen by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone name (e.g. `"example.com"`).
    pub name: String,
}
