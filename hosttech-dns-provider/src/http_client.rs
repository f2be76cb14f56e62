//! Generic HTTP client tools
//!
//! One place for the send → log → classify → read flow. The provider builds its own
//! `RequestBuilder` (URL, headers, body) and hands it over here.
//!
//! Requests are sent exactly once. Transport failures, timeouts and non-2xx answers all
//! surface as [`ProviderError`] so the caller decides what (if anything) to recover from.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text of a `2xx` answer.
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `provider_name` - Provider name (for logging and errors)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok(response_text)` - status was in `200..300`
    /// * `Err(ProviderError::Api)` - any other status, with the status code and body
    /// * `Err(ProviderError::Timeout)` / `Err(ProviderError::NetworkError)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<String, ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{provider_name}] Response Status: {status}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        if !status.is_success() {
            let message = if response_text.trim().is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                truncate_for_log(response_text.trim())
            };
            let err = ProviderError::Api {
                provider: provider_name.to_string(),
                status: status.as_u16(),
                message,
            };
            if err.is_expected() {
                log::warn!("[{provider_name}] {method_name} {url} failed: {err}");
            } else {
                log::error!("[{provider_name}] {method_name} {url} failed: {err}");
            }
            return Err(err);
        }

        Ok(response_text)
    }

    /// Parse JSON response
    ///
    /// # Type Parameters
    /// * `T` - target type
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Envelope {
            data: Vec<u32>,
        }
        let result: Result<Envelope, ProviderError> =
            HttpUtils::parse_json(r#"{"data":[1,2]}"#, "test");
        assert!(
            matches!(&result, Ok(Envelope { data }) if data == &vec![1, 2]),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Envelope {
            data: Vec<u32>,
        }
        let result: Result<Envelope, ProviderError> = HttpUtils::parse_json("not json", "test");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
