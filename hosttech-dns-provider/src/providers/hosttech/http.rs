//! Hosttech HTTP request methods

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::remove_trailing_dot;
use crate::traits::ProviderErrorMapper;
use crate::utils::log_sanitizer::truncate_for_log;

use super::HosttechProvider;
use super::types::DataEnvelope;

/// `/zones`
pub(crate) fn zones_path() -> String {
    "/zones".to_string()
}

/// `/zones/{zone}/records`, trailing dot of the zone removed
pub(crate) fn records_path(zone: &str) -> String {
    format!("/zones/{}/records", remove_trailing_dot(zone))
}

/// `/zones/{zone}/records/{id}`, trailing dot of the zone removed
pub(crate) fn record_path(zone: &str, id: &str) -> String {
    format!("{}/{id}", records_path(zone))
}

impl HosttechProvider {
    /// Request with bearer authorization and JSON content type
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.api_token)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn execute(&self, method: Method, path: &str, body: Option<&Value>) -> Result<String> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.request(method.clone(), &url);
        if let Some(body) = body {
            log::debug!(
                "[{}] Request Body: {}",
                self.provider_name(),
                truncate_for_log(&body.to_string())
            );
            request = request.json(body);
        }

        HttpUtils::execute_request(request, self.provider_name(), method.as_str(), &url).await
    }

    /// Execute GET request and unwrap the `data` envelope
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response_text = self.execute(Method::GET, path, None).await?;
        let envelope: DataEnvelope<T> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;
        Ok(envelope.data)
    }

    /// Execute a POST/PUT with a record body and return the raw record from `data`
    pub(crate) async fn send_record(
        &self,
        method: Method,
        path: &str,
        body: &Value,
    ) -> Result<Value> {
        let response_text = self.execute(method, path, Some(body)).await?;
        let envelope: DataEnvelope<Value> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;
        if envelope.data.is_null() {
            return Err(self.parse_error("response has no record in `data`"));
        }
        Ok(envelope.data)
    }

    /// Execute DELETE request; the response body is ignored
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, None).await.map(|_| ())
    }
}
