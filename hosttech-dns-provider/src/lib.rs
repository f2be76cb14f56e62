//! # hosttech-dns-provider
//!
//! Manage DNS records hosted at [Hosttech.ch](https://www.hosttech.ch/) through a small,
//! provider-independent record model.
//!
//! The crate has three layers:
//!
//! | Layer | Purpose |
//! |-------|---------|
//! | Record codec | Per-type mapping between the API's JSON shapes and [`Record`] |
//! | [`HosttechRecord`] | Decodes API JSON by its `type` field, picks the codec for outgoing records |
//! | [`HosttechProvider`] | Issues the REST calls and converts payloads in both directions |
//!
//! ## Supported Record Types
//!
//! `A`, `AAAA`, `CNAME`, `NS`, `MX`, `TXT` and `TLSA`. Anything else is rejected with
//! [`ProviderError::UnsupportedRecordType`] before a request is sent.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use hosttech_dns_provider::{
//!     HosttechProvider, Record, RecordAppender, RecordDeleter, RecordGetter, ZoneLister,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = HosttechProvider::new("your-api-token")?;
//!
//!     for zone in provider.list_zones().await? {
//!         println!("zone: {}", zone.name);
//!     }
//!
//!     for record in provider.get_records("example.com").await? {
//!         println!("{record}");
//!     }
//!
//!     let created = provider
//!         .append_records(
//!             "example.com",
//!             &[Record::new("A", "sub", "1.2.3.4", Duration::from_secs(1800))],
//!         )
//!         .await?;
//!
//!     provider.delete_records("example.com", &created).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Partial Failures
//!
//! Multi-record operations send one request per record, in order, and stop at the first
//! error. Nothing is rolled back: a [`BatchError`] carries the records that were applied
//! before the failure next to the error itself.
//!
//! ```rust,no_run
//! # use hosttech_dns_provider::*;
//! # async fn example(provider: &HosttechProvider, records: &[Record]) {
//! match provider.set_records("example.com", records).await {
//!     Ok(written) => println!("wrote {} records", written.len()),
//!     Err(BatchError { records: written, error }) => {
//!         eprintln!("stopped after {} of {}: {error}", written.len(), records.len());
//!     }
//! }
//! # }
//! ```
//!
//! `set_records` updates records by id and creates a record instead when the update
//! answers `404 Not Found`; this is the only error the crate recovers from.
//!
//! ## TTL
//!
//! Hosttech rejects TTLs below 600 seconds. Lower values are raised to 600 when a record
//! is sent, without an error.
//!
//! ## Cancellation
//!
//! Every operation is a future; dropping it (for example through `tokio::time::timeout`)
//! stops processing at the next request. Requests that already reached the API stay applied.
//! The per-request deadline comes from [`HosttechConfig::request_timeout_secs`] and surfaces
//! as [`ProviderError::Timeout`].

mod config;
mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export configuration
pub use config::{DEFAULT_API_URL, ENV_API_TOKEN, ENV_API_URL, HosttechConfig};

// Re-export error types
pub use error::{BatchError, BatchResult, ProviderError, Result};

// Re-export capability traits (internal traits are not exported)
pub use traits::{
    DnsProvider, RecordAppender, RecordDeleter, RecordGetter, RecordSetter, ZoneLister,
};

// Re-export canonical types
pub use types::{Record, RecordType, Zone};

// Re-export the provider and its wire types
pub use providers::HosttechProvider;
pub use providers::hosttech::{
    ARecord, AaaaRecord, Base, CnameRecord, HosttechRecord, HosttechZone, MxRecord, NsRecord,
    TlsaRecord, TxtRecord,
};

// Re-export utils module
pub use utils::datetime::MIN_TTL_SECS;
