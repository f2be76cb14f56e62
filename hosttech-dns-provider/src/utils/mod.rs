//! Utility modules.

/// TTL conversion and audit timestamp helpers shared by the record codec.
pub mod datetime;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
