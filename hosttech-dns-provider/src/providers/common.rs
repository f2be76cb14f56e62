//! Provider shared helpers

use std::time::Duration;

use reqwest::Client;

use crate::config::HosttechConfig;
use crate::error::{ProviderError, Result};

// ============ HTTP Client ============

/// Create an HTTP client with the configured timeouts.
pub fn create_http_client(config: &HosttechConfig, provider: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ Name Handling ============

/// Remove one trailing dot, if present.
/// e.g. "example.com." -> "example.com"
pub fn remove_trailing_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Convert a fully qualified name to a name relative to `zone_name`.
/// e.g. "www.example.com" + "example.com" -> "www"
/// e.g. "example.com" + "example.com" -> "@"
/// The zone is matched case-insensitively and only at a label boundary.
/// Names outside the zone (including already relative ones) come back unchanged.
pub fn full_name_to_relative(full_name: &str, zone_name: &str) -> String {
    let full = remove_trailing_dot(full_name);
    let zone = remove_trailing_dot(zone_name);

    if full.is_empty() || full.eq_ignore_ascii_case(zone) {
        "@".to_string()
    } else if let Some(subdomain) = full
        .len()
        .checked_sub(zone.len() + 1)
        .filter(|&split| {
            full.is_char_boundary(split)
                && full[split..].starts_with('.')
                && full[split + 1..].eq_ignore_ascii_case(zone)
        })
        .map(|split| &full[..split])
    {
        subdomain.to_string()
    } else {
        full.to_string()
    }
}
