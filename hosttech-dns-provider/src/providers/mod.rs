//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

pub(crate) mod hosttech;

pub use hosttech::HosttechProvider;

/// Identifier used in log lines and error values.
pub(crate) const PROVIDER_NAME: &str = "hosttech";
