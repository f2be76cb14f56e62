//! Provider configuration

use std::env;
use std::fmt;

use serde::Deserialize;

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::redact_token;

/// Production endpoint of the Hosttech DNS API.
pub const DEFAULT_API_URL: &str = "https://api.ns1.hosttech.eu/api/user/v1";
/// Default connect timeout (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API token.
pub const ENV_API_TOKEN: &str = "HOSTTECH_API_TOKEN";
/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "HOSTTECH_API_URL";

/// Settings of a [`HosttechProvider`](crate::HosttechProvider).
///
/// Deserializes from the usual `api_token` key; every other field has a default,
/// so a bare `{"api_token": "..."}` is a complete configuration.
#[derive(Clone, Deserialize)]
pub struct HosttechConfig {
    /// Bearer token issued in the Hosttech control panel.
    pub api_token: String,
    /// API base URL without trailing slash.
    #[serde(default = "default_api_url")]
    pub base_url: String,
    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Whole-request deadline in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

const fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl HosttechConfig {
    /// Configuration for the production API with default timeouts.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: default_api_url(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Read `HOSTTECH_API_TOKEN` and the optional `HOSTTECH_API_URL`.
    pub fn from_env() -> Result<Self> {
        let api_token = env::var(ENV_API_TOKEN).map_err(|e| ProviderError::InvalidParameter {
            provider: crate::providers::PROVIDER_NAME.to_string(),
            param: ENV_API_TOKEN.to_string(),
            detail: e.to_string(),
        })?;

        let config = Self::new(api_token);
        match env::var(ENV_API_URL) {
            Ok(url) if !url.trim().is_empty() => Ok(config.with_base_url(url)),
            _ => Ok(config),
        }
    }

    /// Point the provider at another endpoint (staging, a mock server, ...).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the request deadline.
    #[must_use]
    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: crate::providers::PROVIDER_NAME.to_string(),
                param: "api_token".to_string(),
                detail: "must not be empty".to_string(),
            });
        }
        if self.base_url.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: crate::providers::PROVIDER_NAME.to_string(),
                param: "base_url".to_string(),
                detail: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for HosttechConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HosttechConfig")
            .field("api_token", &redact_token(&self.api_token))
            .field("base_url", &self.base_url)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
