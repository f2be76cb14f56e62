//! Log sanitization utilities
//!
//! Keeps API tokens and large TXT/TLSA payloads out of debug and error logs.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading token characters left visible by [`redact_token`].
const TOKEN_VISIBLE_PREFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a response or request body for logging.
///
/// Bodies within the limit come back unchanged; longer ones keep the first
/// `TRUNCATE_LIMIT` bytes and report the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask an API token, keeping only a short prefix for identification.
///
/// Tokens no longer than the prefix are masked completely.
pub fn redact_token(token: &str) -> String {
    if token.is_empty() {
        return String::new();
    }
    if token.chars().count() <= TOKEN_VISIBLE_PREFIX {
        return "****".to_string();
    }
    let prefix: String = token.chars().take(TOKEN_VISIBLE_PREFIX).collect();
    format!("{prefix}****")
}
