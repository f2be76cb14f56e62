//! Hosttech.ch DNS Provider
//!
//! API reference: <https://api.ns1.hosttech.eu/api/documentation/>

mod error;
mod http;
mod provider;
mod types;
mod wrapper;

use std::fmt;

use reqwest::Client;

use crate::config::HosttechConfig;
use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::utils::log_sanitizer::redact_token;

pub use types::{
    ARecord, AaaaRecord, Base, CnameRecord, HosttechZone, MxRecord, NsRecord, TlsaRecord,
    TxtRecord,
};
pub use wrapper::HosttechRecord;

/// Hosttech DNS Provider
///
/// Holds only immutable configuration, so one instance can serve concurrent calls.
/// Each operation issues one request per record and never retries.
pub struct HosttechProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
}

impl HosttechProvider {
    /// Provider for the production API with default timeouts.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::from_config(HosttechConfig::new(api_token))
    }

    /// Provider built from an explicit configuration.
    pub fn from_config(config: HosttechConfig) -> Result<Self> {
        config.validate()?;
        let client = create_http_client(&config, super::PROVIDER_NAME)?;
        log::debug!(
            "[{}] Provider created for {}",
            super::PROVIDER_NAME,
            config.base_url
        );

        Ok(Self {
            client,
            api_token: config.api_token,
            base_url: config.base_url,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for HosttechProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HosttechProvider")
            .field("api_token", &redact_token(&self.api_token))
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
