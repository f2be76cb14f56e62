//! Hosttech API types and the per-type record codec
//!
//! Every record type has its own field layout on the wire. Each struct converts
//! to a canonical [`Record`] with `to_canonical` and is built from one with
//! `from_canonical`; the conversions never fail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::providers::common::{full_name_to_relative, remove_trailing_dot};
use crate::types::{Record, RecordType, Zone};
use crate::utils::datetime::{audit_stamp, duration_to_ttl_secs, ttl_secs_to_duration};

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero_u64(v: &u64) -> bool {
    *v == 0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero_u32(v: &u32) -> bool {
    *v == 0
}

/// Audit text stored in `comment` of every record written by this crate.
pub(crate) fn generate_comment(now: DateTime<Utc>) -> String {
    format!(
        "This record was created or updated with {} at {} UTC",
        env!("CARGO_PKG_NAME"),
        audit_stamp(now)
    )
}

/// Generic `{ "data": ... }` response envelope
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Attributes shared by all record types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base {
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub id: u64,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub record_type: String,
    /// Whole seconds
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Base {
    /// Shared attributes of a record about to be sent.
    ///
    /// The TTL is clamped to the provider minimum without notice and the comment is
    /// regenerated from `now`. The id stays unset: the provider assigns it.
    fn from_canonical(record: &Record, now: DateTime<Utc>) -> Self {
        let ttl = duration_to_ttl_secs(record.ttl);
        if u64::from(ttl) != record.ttl.as_secs() {
            log::debug!(
                "[hosttech] TTL of {} {} clamped from {}s to {ttl}s",
                record.record_type,
                record.name,
                record.ttl.as_secs()
            );
        }

        Self {
            id: 0,
            record_type: record.record_type.to_string(),
            ttl,
            comment: generate_comment(now),
        }
    }

    /// Canonical record carrying the shared attributes; callers fill in name/value.
    fn to_canonical(&self) -> Record {
        Record {
            id: self.id.to_string(),
            record_type: RecordType::from(self.record_type.as_str()),
            name: String::new(),
            value: String::new(),
            ttl: ttl_secs_to_duration(self.ttl),
            priority: 0,
        }
    }
}

/// A record: name → IPv4 address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ARecord {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipv4: String,
}

impl ARecord {
    pub fn to_canonical(&self, zone: &str) -> Record {
        Record {
            name: full_name_to_relative(&self.name, zone),
            value: self.ipv4.clone(),
            ..self.base.to_canonical()
        }
    }

    pub fn from_canonical(record: &Record, now: DateTime<Utc>) -> Self {
        Self {
            base: Base::from_canonical(record, now),
            name: record.name.clone(),
            ipv4: record.value.clone(),
        }
    }
}

/// AAAA record: name → IPv6 address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AaaaRecord {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ipv6: String,
}

impl AaaaRecord {
    pub fn to_canonical(&self, zone: &str) -> Record {
        Record {
            name: full_name_to_relative(&self.name, zone),
            value: self.ipv6.clone(),
            ..self.base.to_canonical()
        }
    }

    pub fn from_canonical(record: &Record, now: DateTime<Utc>) -> Self {
        Self {
            base: Base::from_canonical(record, now),
            name: record.name.clone(),
            ipv6: record.value.clone(),
        }
    }
}

/// CNAME record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnameRecord {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cname: String,
}

impl CnameRecord {
    pub fn to_canonical(&self, zone: &str) -> Record {
        Record {
            name: full_name_to_relative(&self.name, zone),
            value: self.cname.clone(),
            ..self.base.to_canonical()
        }
    }

    pub fn from_canonical(record: &Record, now: DateTime<Utc>) -> Self {
        Self {
            base: Base::from_canonical(record, now),
            name: record.name.clone(),
            cname: record.value.clone(),
        }
    }
}

/// NS record. The owner lives in `ownername`, the name server in `targetname`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NsRecord {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ownername: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub targetname: String,
}

impl NsRecord {
    pub fn to_canonical(&self, zone: &str) -> Record {
        Record {
            name: full_name_to_relative(&self.ownername, zone),
            value: self.targetname.clone(),
            ..self.base.to_canonical()
        }
    }

    pub fn from_canonical(record: &Record, now: DateTime<Utc>) -> Self {
        Self {
            base: Base::from_canonical(record, now),
            ownername: record.name.clone(),
            targetname: record.value.clone(),
        }
    }
}

/// MX record.
///
/// Field use is inverted compared to the other types: `ownername` holds the
/// record name and `name` holds the mail server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxRecord {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ownername: String,
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub pref: u32,
}

impl MxRecord {
    pub fn to_canonical(&self, zone: &str) -> Record {
        Record {
            name: full_name_to_relative(&self.ownername, zone),
            value: self.name.clone(),
            priority: self.pref,
            ..self.base.to_canonical()
        }
    }

    pub fn from_canonical(record: &Record, now: DateTime<Utc>) -> Self {
        Self {
            base: Base::from_canonical(record, now),
            name: record.value.clone(),
            ownername: record.name.clone(),
            pref: record.priority,
        }
    }
}

/// TXT record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxtRecord {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl TxtRecord {
    pub fn to_canonical(&self, zone: &str) -> Record {
        Record {
            name: full_name_to_relative(&self.name, zone),
            value: self.text.clone(),
            ..self.base.to_canonical()
        }
    }

    /// Only TXT drops a trailing dot from the name; the other types send it unchanged.
    pub fn from_canonical(record: &Record, now: DateTime<Utc>) -> Self {
        Self {
            base: Base::from_canonical(record, now),
            name: remove_trailing_dot(&record.name).to_string(),
            text: record.value.clone(),
        }
    }
}

/// TLSA record. The association data travels in `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsaRecord {
    #[serde(flatten)]
    pub base: Base,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl TlsaRecord {
    pub fn to_canonical(&self, zone: &str) -> Record {
        Record {
            name: full_name_to_relative(&self.name, zone),
            value: self.text.clone(),
            ..self.base.to_canonical()
        }
    }

    pub fn from_canonical(record: &Record, now: DateTime<Utc>) -> Self {
        Self {
            base: Base::from_canonical(record, now),
            name: record.name.clone(),
            text: record.value.clone(),
        }
    }
}

/// Hosttech zone (without records)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HosttechZone {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default)]
    pub nameserver: String,
    #[serde(default)]
    pub dnssec: bool,
    #[serde(default)]
    pub dnssec_email: String,
}

impl HosttechZone {
    /// Only the name is exposed; the rest is provider-internal.
    pub fn to_zone(&self) -> Zone {
        Zone {
            name: self.name.clone(),
        }
    }
}
