//! Shared test helpers

#![allow(dead_code)]

use std::env;

use hosttech_dns_provider::{HosttechConfig, HosttechProvider};
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer};

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_ZONE: &str = "example.com";

/// Skip the test when any of the given environment variables is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {:?}",
            format_args!($($msg)+),
            res.as_ref().err()
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Provider talking to the given mock server.
pub fn mock_provider(server: &MockServer) -> HosttechProvider {
    mock_provider_with_timeout(server, 30)
}

/// Provider talking to the given mock server with a custom request timeout.
pub fn mock_provider_with_timeout(server: &MockServer, secs: u64) -> HosttechProvider {
    let config = HosttechConfig::new(TEST_TOKEN)
        .with_base_url(server.uri())
        .with_request_timeout(secs);
    match HosttechProvider::from_config(config) {
        Ok(provider) => provider,
        Err(e) => panic!("failed to build provider: {e}"),
    }
}

/// Mock that only matches authenticated JSON requests.
pub fn api_mock(http_method: &str, request_path: &str) -> MockBuilder {
    Mock::given(method(http_method))
        .and(path(request_path))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(header("Content-Type", "application/json"))
}

/// Wrap a payload the way the API does.
pub fn envelope(data: Value) -> Value {
    json!({ "data": data })
}

pub fn a_record_json(id: u64, name: &str, ipv4: &str, ttl: u32) -> Value {
    json!({
        "id": id,
        "type": "A",
        "name": name,
        "ipv4": ipv4,
        "ttl": ttl,
        "comment": ""
    })
}

pub fn mx_record_json(id: u64, ownername: &str, name: &str, pref: u32, ttl: u32) -> Value {
    json!({
        "id": id,
        "type": "MX",
        "ownername": ownername,
        "name": name,
        "pref": pref,
        "ttl": ttl,
        "comment": ""
    })
}

/// Live API context, built from `HOSTTECH_API_TOKEN` and `TEST_ZONE`.
pub struct LiveContext {
    pub provider: HosttechProvider,
    pub zone: String,
}

impl LiveContext {
    pub fn from_env() -> Option<Self> {
        let config = HosttechConfig::from_env().ok()?;
        let zone = env::var("TEST_ZONE").ok()?;
        let provider = HosttechProvider::from_config(config).ok()?;
        Some(Self { provider, zone })
    }
}

/// Unique record name so parallel runs do not collide.
pub fn generate_test_record_name() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("_test-{}", nanos % 1_000_000_000)
}
