//! The ServiceNow change-request adapter.
//!
//! One instance per platform-managed connection: the platform constructs
//! it with an id and connection properties, calls [`connect`] once, and
//! then issues [`get_record`] / [`post_record`] on demand. Availability is
//! observable through the status bus ([`subscribe`]) and log lines only.
//!
//! [`connect`]: ServiceNowAdapter::connect
//! [`get_record`]: ServiceNowAdapter::get_record
//! [`post_record`]: ServiceNowAdapter::post_record
//! [`subscribe`]: ServiceNowAdapter::subscribe

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::domain::errors::{AdapterError, AdapterResult};
use crate::domain::models::{
    AdapterConfig, AdapterStatus, ChangeRequestDraft, ChangeRequestRecord, StatusEvent,
};
use crate::domain::ports::{RawResponse, TicketTransport};
use crate::services::StatusBus;

use super::client::ServiceNowClient;
use super::models::{TableCreateResponse, TableQueryResponse};

/// Literal substring that identifies a hibernation placeholder page.
const HIBERNATION_MARKER: &str = "Instance Hibernating page";

/// Adapter for polling and mutating change requests in one ServiceNow
/// instance.
///
/// Stateless between calls: no caching, no retries; every operation
/// performs a fresh request through the transport. Concurrent calls are
/// independent and share nothing mutable.
pub struct ServiceNowAdapter {
    /// Platform-assigned id, carried on every status event.
    id: String,
    /// The external HTTP collaborator.
    transport: Arc<dyn TicketTransport>,
    /// Status event distribution.
    status_bus: StatusBus,
}

impl ServiceNowAdapter {
    /// Create an adapter with the default reqwest-backed transport.
    pub fn new(id: impl Into<String>, config: AdapterConfig) -> AdapterResult<Self> {
        let client = ServiceNowClient::new(config)?;
        Ok(Self::with_transport(id, Arc::new(client)))
    }

    /// Create an adapter over an explicit transport.
    ///
    /// This is the seam tests use to substitute a scripted transport.
    pub fn with_transport(id: impl Into<String>, transport: Arc<dyn TicketTransport>) -> Self {
        Self {
            id: id.into(),
            transport,
            status_bus: StatusBus::new(),
        }
    }

    /// The id this adapter was constructed with.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Subscribe to status events emitted by this adapter.
    pub fn subscribe(&self) -> broadcast::Receiver<StatusEvent> {
        self.status_bus.subscribe()
    }

    /// Complete a single health probe and emit ONLINE or OFFLINE.
    ///
    /// The platform calls this once after construction. The outcome is
    /// observable only via the status bus and log lines.
    pub async fn connect(&self) {
        self.healthcheck().await;
    }

    /// Probe the instance by issuing a real record fetch.
    ///
    /// Emits exactly one status event per invocation and returns the same
    /// status. A hibernating instance is a recognized degraded case; it is
    /// still unhealthy, the branches differ only in log wording.
    pub async fn healthcheck(&self) -> AdapterStatus {
        match self.get_record().await {
            Ok(records) => {
                tracing::debug!(
                    adapter_id = %self.id,
                    count = records.len(),
                    "health probe succeeded"
                );
                self.emit_online()
            }
            Err(AdapterError::Hibernating) => {
                tracing::warn!(
                    adapter_id = %self.id,
                    "health probe failed: instance is hibernating"
                );
                self.emit_offline()
            }
            Err(err) => {
                tracing::error!(
                    adapter_id = %self.id,
                    error = %err,
                    "health probe failed"
                );
                self.emit_offline()
            }
        }
    }

    /// Whether a raw response is the instance's hibernation placeholder.
    pub fn is_hibernating(response: &RawResponse) -> bool {
        response.body.contains(HIBERNATION_MARKER)
    }

    /// Fetch every change request from the configured table, normalized
    /// and in table order.
    pub async fn get_record(&self) -> AdapterResult<Vec<ChangeRequestRecord>> {
        let raw = self.transport.fetch_records().await?;
        let parsed: TableQueryResponse = Self::parse_body(&raw)?;
        Ok(parsed.result.iter().map(|r| r.normalize()).collect())
    }

    /// Create a new change request and return the normalized record.
    pub async fn post_record(
        &self,
        draft: &ChangeRequestDraft,
    ) -> AdapterResult<ChangeRequestRecord> {
        let raw = self.transport.create_record(draft).await?;
        let parsed: TableCreateResponse = Self::parse_body(&raw)?;
        Ok(parsed.result.normalize())
    }

    /// Emit ONLINE, signalling the external system is available.
    pub fn emit_online(&self) -> AdapterStatus {
        tracing::info!(adapter_id = %self.id, "ServiceNow: instance is available");
        self.emit_status(AdapterStatus::Online)
    }

    /// Emit OFFLINE, signalling the external system is not available.
    pub fn emit_offline(&self) -> AdapterStatus {
        tracing::warn!(adapter_id = %self.id, "ServiceNow: instance is unavailable");
        self.emit_status(AdapterStatus::Offline)
    }

    /// Sole emission primitive: publish a status event carrying this
    /// adapter's id.
    pub fn emit_status(&self, status: AdapterStatus) -> AdapterStatus {
        self.status_bus.publish(&self.id, status);
        status
    }

    /// Validate a raw response and parse its body as the expected shape.
    ///
    /// Checked in order: hibernation page, HTTP status, JSON shape. The
    /// parse step is guarded so a malformed body becomes a distinct error
    /// instead of a fault.
    fn parse_body<T: serde::de::DeserializeOwned>(raw: &RawResponse) -> AdapterResult<T> {
        if Self::is_hibernating(raw) {
            return Err(AdapterError::Hibernating);
        }
        if !raw.is_success() {
            return Err(AdapterError::HttpStatus {
                status: raw.status,
                body: raw.body.clone(),
            });
        }
        serde_json::from_str(&raw.body).map_err(AdapterError::from)
    }
}
