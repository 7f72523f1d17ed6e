//! ServiceNow Table API HTTP client.
//!
//! Concrete [`TicketTransport`] backed by reqwest. Owns authentication and
//! the request timeout; everything above the HTTP exchange (hibernation
//! detection, JSON shape validation, normalization) stays in the adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::errors::{AdapterError, AdapterResult};
use crate::domain::models::{AdapterConfig, ChangeRequestDraft};
use crate::domain::ports::{RawResponse, TicketTransport};

/// HTTP client for one ServiceNow instance's Table API.
#[derive(Debug, Clone)]
pub struct ServiceNowClient {
    /// The underlying HTTP client.
    http: Client,
    /// Connection properties (base URL, credentials, table).
    config: AdapterConfig,
}

impl ServiceNowClient {
    /// Build a client from connection properties.
    pub fn new(config: AdapterConfig) -> AdapterResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AdapterError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    /// URL of the configured table endpoint.
    fn table_url(&self) -> String {
        format!(
            "{}/api/now/table/{}",
            self.config.url.trim_end_matches('/'),
            self.config.table
        )
    }

    /// Read a reqwest response into a [`RawResponse`].
    ///
    /// The body is taken as text so a hibernation HTML page survives intact
    /// for the adapter to inspect.
    async fn into_raw(response: reqwest::Response) -> AdapterResult<RawResponse> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl TicketTransport for ServiceNowClient {
    async fn fetch_records(&self) -> AdapterResult<RawResponse> {
        let url = self.table_url();
        tracing::debug!(url = %url, "GET change requests");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::into_raw(response).await
    }

    async fn create_record(&self, draft: &ChangeRequestDraft) -> AdapterResult<RawResponse> {
        let url = self.table_url();
        tracing::debug!(url = %url, "POST change request");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header("Accept", "application/json")
            .json(draft)
            .send()
            .await?;

        Self::into_raw(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(url: &str) -> AdapterConfig {
        AdapterConfig {
            url: url.to_string(),
            username: "admin".to_string(),
            password: "secret".to_string(),
            table: "change_request".to_string(),
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_table_url_joins_base_and_table() {
        let client = ServiceNowClient::new(test_config("https://dev1.service-now.com")).unwrap();
        assert_eq!(
            client.table_url(),
            "https://dev1.service-now.com/api/now/table/change_request"
        );
    }

    #[test]
    fn test_table_url_tolerates_trailing_slash() {
        let client = ServiceNowClient::new(test_config("https://dev1.service-now.com/")).unwrap();
        assert_eq!(
            client.table_url(),
            "https://dev1.service-now.com/api/now/table/change_request"
        );
    }
}
