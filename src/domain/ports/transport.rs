//! Transport port for the remote ticketing system.
//!
//! The adapter talks to ServiceNow exclusively through this trait, which
//! keeps the normalization and health-probe logic independent of the
//! concrete HTTP client and lets tests substitute a scripted transport.

use async_trait::async_trait;

use crate::domain::errors::AdapterResult;
use crate::domain::models::ChangeRequestDraft;

/// The raw result of one HTTP exchange with the ticketing system.
///
/// The body is kept as text rather than parsed JSON: in the degraded case
/// the instance answers with an HTML hibernation page, and that detection
/// has to happen before any JSON parsing is attempted.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code of the exchange.
    pub status: u16,
    /// Response body text (table-API JSON, or an HTML placeholder page).
    pub body: String,
}

impl RawResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port for issuing table-API requests against the ticketing system.
///
/// Implementations own connection details, authentication, and timeouts.
/// Errors below the HTTP layer (DNS, TLS, refused connections) surface as
/// `Err`; an HTTP response of any status, hibernation pages included,
/// surfaces as `Ok(RawResponse)` for the adapter to interpret.
#[async_trait]
pub trait TicketTransport: Send + Sync {
    /// Fetch every record from the configured table.
    async fn fetch_records(&self) -> AdapterResult<RawResponse>;

    /// Create one record in the configured table from the given draft.
    async fn create_record(&self, draft: &ChangeRequestDraft) -> AdapterResult<RawResponse>;
}
