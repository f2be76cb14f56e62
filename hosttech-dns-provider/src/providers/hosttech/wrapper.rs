//! Record type dispatch
//!
//! Incoming JSON is decoded in two passes: first only the `type` field, then the full
//! payload as the struct that type selects. Outgoing canonical records pick their struct
//! from the same table. Both directions reject types outside the table with
//! [`ProviderError::UnsupportedRecordType`].

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::providers::PROVIDER_NAME;
use crate::types::{Record, RecordType};

use super::types::{
    ARecord, AaaaRecord, Base, CnameRecord, MxRecord, NsRecord, TlsaRecord, TxtRecord,
};

/// Exactly one Hosttech record of any supported type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HosttechRecord {
    A(ARecord),
    Aaaa(AaaaRecord),
    Cname(CnameRecord),
    Ns(NsRecord),
    Mx(MxRecord),
    Txt(TxtRecord),
    Tlsa(TlsaRecord),
}

/// Only the discriminant, read before the full decode.
#[derive(Deserialize)]
struct Discriminant {
    #[serde(rename = "type", default)]
    record_type: String,
}

impl HosttechRecord {
    /// Decode one record from the API's JSON representation.
    pub fn decode(value: &Value) -> Result<Self> {
        let Discriminant { record_type } = decode_as(value)?;

        Ok(match record_type.as_str() {
            "A" => Self::A(decode_as(value)?),
            "AAAA" => Self::Aaaa(decode_as(value)?),
            "CNAME" => Self::Cname(decode_as(value)?),
            "NS" => Self::Ns(decode_as(value)?),
            "MX" => Self::Mx(decode_as(value)?),
            "TXT" => Self::Txt(decode_as(value)?),
            "TLSA" => Self::Tlsa(decode_as(value)?),
            _ => return Err(unsupported(record_type)),
        })
    }

    /// Decode one record from raw JSON text.
    pub fn decode_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| parse_error(&e))?;
        Self::decode(&value)
    }

    /// Build the provider representation of `record`, stamping the comment with the current time.
    pub fn from_canonical(record: &Record) -> Result<Self> {
        Self::from_canonical_at(record, Utc::now())
    }

    /// Same as [`from_canonical`](Self::from_canonical) with an explicit clock.
    pub fn from_canonical_at(record: &Record, now: DateTime<Utc>) -> Result<Self> {
        Ok(match &record.record_type {
            RecordType::A => Self::A(ARecord::from_canonical(record, now)),
            RecordType::Aaaa => Self::Aaaa(AaaaRecord::from_canonical(record, now)),
            RecordType::Cname => Self::Cname(CnameRecord::from_canonical(record, now)),
            RecordType::Ns => Self::Ns(NsRecord::from_canonical(record, now)),
            RecordType::Mx => Self::Mx(MxRecord::from_canonical(record, now)),
            RecordType::Txt => Self::Txt(TxtRecord::from_canonical(record, now)),
            RecordType::Tlsa => Self::Tlsa(TlsaRecord::from_canonical(record, now)),
            other => return Err(unsupported(other.to_string())),
        })
    }

    /// Convert to a canonical record with its name relative to `zone`.
    pub fn to_canonical(&self, zone: &str) -> Record {
        match self {
            Self::A(r) => r.to_canonical(zone),
            Self::Aaaa(r) => r.to_canonical(zone),
            Self::Cname(r) => r.to_canonical(zone),
            Self::Ns(r) => r.to_canonical(zone),
            Self::Mx(r) => r.to_canonical(zone),
            Self::Txt(r) => r.to_canonical(zone),
            Self::Tlsa(r) => r.to_canonical(zone),
        }
    }

    /// Attributes shared by every record type.
    pub fn base(&self) -> &Base {
        match self {
            Self::A(r) => &r.base,
            Self::Aaaa(r) => &r.base,
            Self::Cname(r) => &r.base,
            Self::Ns(r) => &r.base,
            Self::Mx(r) => &r.base,
            Self::Txt(r) => &r.base,
            Self::Tlsa(r) => &r.base,
        }
    }

    /// JSON request body.
    pub fn to_body(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ProviderError::SerializationError {
            provider: PROVIDER_NAME.to_string(),
            detail: e.to_string(),
        })
    }
}

fn decode_as<T: DeserializeOwned>(value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|e| parse_error(&e))
}

fn parse_error(e: &serde_json::Error) -> ProviderError {
    ProviderError::ParseError {
        provider: PROVIDER_NAME.to_string(),
        detail: e.to_string(),
    }
}

fn unsupported(record_type: String) -> ProviderError {
    ProviderError::UnsupportedRecordType {
        provider: PROVIDER_NAME.to_string(),
        record_type,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::TimeZone;

    use super::*;

    fn base(id: u64, record_type: &str) -> Base {
        Base {
            id,
            record_type: record_type.to_string(),
            ttl: 3600,
            comment: "my first record".to_string(),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap()
    }

    #[test]
    fn decode_a_record() {
        let decoded = HosttechRecord::decode_str(
            r#"{
              "id": 10,
              "type": "A",
              "name": "www",
              "ipv4": "1.2.3.4",
              "ttl": 3600,
              "comment": "my first record"
            }"#,
        )
        .unwrap();
        assert_eq!(
            decoded,
            HosttechRecord::A(ARecord {
                base: base(10, "A"),
                name: "www".to_string(),
                ipv4: "1.2.3.4".to_string(),
            })
        );
    }

    #[test]
    fn decode_aaaa_record() {
        let decoded = HosttechRecord::decode_str(
            r#"{ "id": 11, "type": "AAAA", "name": "www", "ipv6": "2001:db8:1234::1", "ttl": 3600, "comment": "my first record" }"#,
        )
        .unwrap();
        assert_eq!(
            decoded,
            HosttechRecord::Aaaa(AaaaRecord {
                base: base(11, "AAAA"),
                name: "www".to_string(),
                ipv6: "2001:db8:1234::1".to_string(),
            })
        );
    }

    #[test]
    fn decode_ns_record() {
        let decoded = HosttechRecord::decode_str(
            r#"{ "id": 14, "type": "NS", "ownername": "sub", "targetname": "ns1.example.com", "ttl": 3600, "comment": "my first record" }"#,
        )
        .unwrap();
        assert_eq!(
            decoded,
            HosttechRecord::Ns(NsRecord {
                base: base(14, "NS"),
                ownername: "sub".to_string(),
                targetname: "ns1.example.com".to_string(),
            })
        );
    }

    #[test]
    fn decode_cname_record() {
        let decoded = HosttechRecord::decode_str(
            r#"{ "id": 13, "type": "CNAME", "name": "www", "cname": "site.example.com", "ttl": 3600, "comment": "my first record" }"#,
        )
        .unwrap();
        assert_eq!(
            decoded,
            HosttechRecord::Cname(CnameRecord {
                base: base(13, "CNAME"),
                name: "www".to_string(),
                cname: "site.example.com".to_string(),
            })
        );
    }

    #[test]
    fn decode_mx_record() {
        let decoded = HosttechRecord::decode_str(
            r#"{ "id": 14, "type": "MX", "ownername": "owner name", "name": "mail.example.com", "pref": 10, "ttl": 3600, "comment": "my first record" }"#,
        )
        .unwrap();
        assert_eq!(
            decoded,
            HosttechRecord::Mx(MxRecord {
                base: base(14, "MX"),
                name: "mail.example.com".to_string(),
                ownername: "owner name".to_string(),
                pref: 10,
            })
        );
    }

    #[test]
    fn decode_txt_and_tlsa_records() {
        let txt = HosttechRecord::decode_str(
            r#"{ "id": 17, "type": "TXT", "name": "txt name", "text": "v=spf1 ip4:1.2.3.4/32 -all", "ttl": 3600, "comment": "my first record" }"#,
        )
        .unwrap();
        assert_eq!(
            txt,
            HosttechRecord::Txt(TxtRecord {
                base: base(17, "TXT"),
                name: "txt name".to_string(),
                text: "v=spf1 ip4:1.2.3.4/32 -all".to_string(),
            })
        );

        let tlsa = HosttechRecord::decode_str(
            r#"{ "id": 18, "type": "TLSA", "name": "tlsa name", "text": "0 0 1 d2abde240d7cd3ee6b4b28c54df034b97983a1d16e8a410e4561cb106618e971", "ttl": 3600, "comment": "my first record" }"#,
        )
        .unwrap();
        assert_eq!(tlsa.base().id, 18);
        assert_eq!(tlsa.base().record_type, "TLSA");
        assert!(matches!(tlsa, HosttechRecord::Tlsa(ref r) if r.name == "tlsa name"));
    }

    #[test]
    fn decode_unknown_type_fails() {
        let result = HosttechRecord::decode_str(
            r#"{ "id": 1, "type": "UNKNOWN", "name": "x", "ttl": 3600 }"#,
        );
        assert!(
            matches!(
                &result,
                Err(ProviderError::UnsupportedRecordType { record_type, .. })
                    if record_type == "UNKNOWN"
            ),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn decode_malformed_json_is_parse_error() {
        assert!(matches!(
            HosttechRecord::decode_str("{ not json"),
            Err(ProviderError::ParseError { .. })
        ));
        assert!(matches!(
            HosttechRecord::decode_str(r#"{ "type": "A", "ttl": "long" }"#),
            Err(ProviderError::ParseError { .. })
        ));
    }

    #[test]
    fn encode_unsupported_type_fails() {
        let record = Record::new(
            "SRV",
            "_sip._tcp",
            "10 5060 sip.example.com",
            Duration::from_secs(600),
        );
        let result = HosttechRecord::from_canonical(&record);
        assert!(matches!(
            result,
            Err(ProviderError::UnsupportedRecordType { ref record_type, .. })
                if record_type == "SRV"
        ));
    }

    #[test]
    fn round_trip_keeps_semantic_fields() {
        let zone = "example.com";
        let records = [
            Record::new("A", "sub", "192.0.2.1", Duration::from_secs(1800)),
            Record::new("AAAA", "sub", "2001:db8::1", Duration::from_secs(1800)),
            Record::new("CNAME", "alias", "target.example.com", Duration::from_secs(3600)),
            Record::new("NS", "delegated", "ns1.example.net", Duration::from_secs(7200)),
            Record::new("MX", "@", "mail.example.com", Duration::from_secs(3600)).with_priority(10),
            Record::new("TXT", "_acme-challenge", "token-value", Duration::from_secs(100)),
            Record::new("TLSA", "_443._tcp", "3 1 1 abcdef", Duration::from_secs(900)),
        ];

        for record in &records {
            let encoded = HosttechRecord::from_canonical_at(record, fixed_now()).unwrap();
            // Simulate the API echoing the stored record with a fresh id.
            let mut echoed = encoded.to_body().unwrap();
            echoed["id"] = serde_json::json!(42);
            let decoded = HosttechRecord::decode(&echoed).unwrap().to_canonical(zone);

            assert_eq!(decoded.record_type, record.record_type);
            assert_eq!(decoded.name, record.name, "name of {}", record.record_type);
            assert_eq!(decoded.value, record.value, "value of {}", record.record_type);
            assert_eq!(decoded.priority, record.priority);
            assert_eq!(decoded.ttl, record.ttl.max(Duration::from_secs(600)));
            assert_eq!(decoded.id, "42");
        }
    }

    #[test]
    fn mx_from_api_to_canonical() {
        let decoded = HosttechRecord::decode_str(
            r#"{ "id": 5, "type": "MX", "ownername": "sub.example.com", "name": "mail.example.com", "pref": 10, "ttl": 3600 }"#,
        )
        .unwrap()
        .to_canonical("example.com");
        assert_eq!(decoded.name, "sub");
        assert_eq!(decoded.value, "mail.example.com");
        assert_eq!(decoded.priority, 10);
    }

    #[test]
    fn body_carries_comment_and_type() {
        let record = Record::new("TXT", "sub.example.com.", "hello", Duration::from_secs(60));
        let encoded = HosttechRecord::from_canonical_at(&record, fixed_now()).unwrap();
        assert_eq!(encoded.base().id, 0);
        assert_eq!(encoded.base().ttl, 600);

        let body = encoded.to_body().unwrap();
        assert_eq!(body["type"], "TXT");
        assert_eq!(body["name"], "sub.example.com");
        assert_eq!(body["ttl"], 600);
        assert!(body.get("id").is_none());
        assert_eq!(
            body["comment"],
            "This record was created or updated with hosttech-dns-provider at Jan  2 15:04:05 UTC"
        );
    }
}
